//! Type-safe session management wrapper.
//!
//! Centralizes the session key used for the logged-in employee so that the login
//! handler, the logout handler and the login gate cannot drift apart.

use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
pub(crate) const SESSION_EMPLOYEE_ID: &str = "employee";

/// Authentication session management.
///
/// Handles storing and retrieving the authenticated employee's id and the session
/// lifecycle operations around login and logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the employee's id in the session.
    ///
    /// The session id is cycled first so a pre-login session id cannot be reused
    /// after authentication.
    ///
    /// # Returns
    /// - `Ok(())` - Employee id successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_employee_id(&self, employee_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_EMPLOYEE_ID, employee_id)
            .await?;
        Ok(())
    }

    /// Retrieves the logged-in employee's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(employee_id))` - Employee is logged in
    /// - `Ok(None)` - No employee in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_employee_id(&self) -> Result<Option<i32>, AppError> {
        let employee_id = self.session.get::<i32>(SESSION_EMPLOYEE_ID).await?;
        Ok(employee_id)
    }

    /// Removes all data from the session and deletes it from the store.
    ///
    /// Used during logout.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
