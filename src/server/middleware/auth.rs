//! Login gate applied to every route.
//!
//! Requests to exempt paths pass straight through. Every other request must carry a
//! session with a logged-in employee, otherwise it is answered with the `NOTLOGIN`
//! envelope and never reaches a handler.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Paths served without a login.
const EXEMPT_PATHS: &[&str] = &[
    "/employee/login",
    "/employee/logout",
    "/user/sendMsg",
    "/user/login",
];

/// Path prefixes served without a login, including every path below them.
const EXEMPT_PREFIXES: &[&str] = &["/backend", "/front", "/api-docs"];

/// Identity of the logged-in employee, attached to each authenticated request.
///
/// Handlers extract it with `Extension<EmployeeContext>` to stamp audit columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeContext {
    pub employee_id: i32,
}

pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Requires a logged-in employee in the session.
    ///
    /// # Returns
    /// - `Ok(EmployeeContext)` - Session carries an employee id
    /// - `Err(AuthError::NotLoggedIn)` - No employee id in session
    /// - `Err(AppError::SessionErr(_))` - Session store could not be read
    pub async fn require(&self) -> Result<EmployeeContext, AppError> {
        let Some(employee_id) = AuthSession::new(self.session).get_employee_id().await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        Ok(EmployeeContext { employee_id })
    }
}

/// Returns whether `path` bypasses the login gate.
pub fn is_exempt(path: &str) -> bool {
    if EXEMPT_PATHS.contains(&path) {
        return true;
    }

    EXEMPT_PREFIXES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

/// Axum middleware enforcing the login gate.
///
/// A session store failure is logged and treated as a missing login.
pub async fn require_login(session: Session, mut request: Request, next: Next) -> Response {
    if is_exempt(request.uri().path()) {
        return next.run(request).await;
    }

    match AuthGuard::new(&session).require().await {
        Ok(employee) => {
            tracing::info!(
                "Employee {} requested {} {}",
                employee.employee_id,
                request.method(),
                request.uri().path()
            );

            request.extensions_mut().insert(employee);
            next.run(request).await
        }
        Err(AppError::AuthErr(err)) => err.into_response(),
        Err(err) => {
            tracing::warn!("Failed to read session, treating as not logged in: {}", err);
            AuthError::NotLoggedIn.into_response()
        }
    }
}
