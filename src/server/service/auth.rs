use sea_orm::DatabaseConnection;

use crate::server::{
    data::employee::EmployeeRepository,
    error::{auth::AuthError, AppError},
    model::employee::Employee,
    util::password::{hash_password, verify_password},
};

/// Display name given to the seeded admin account.
const SEEDED_ADMIN_NAME: &str = "Administrator";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks credentials and returns the employee to store in the session.
    ///
    /// # Returns
    /// - `Ok(Employee)` - Credentials valid and account enabled
    /// - `Err(AuthError::LoginFailed)` - Unknown username or wrong password
    /// - `Err(AuthError::AccountDisabled)` - Credentials valid but account disabled
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, username: &str, password: &str) -> Result<Employee, AppError> {
        let repo = EmployeeRepository::new(self.db);

        let Some(entity) = repo.find_by_username(username).await? else {
            return Err(AuthError::LoginFailed(username.to_string()).into());
        };

        if !verify_password(password, &entity.password) {
            return Err(AuthError::LoginFailed(username.to_string()).into());
        }

        let employee = Employee::from_entity(entity);
        if !employee.is_enabled() {
            return Err(AuthError::AccountDisabled(employee.id).into());
        }

        tracing::info!("Employee {} logged in", employee.id);

        Ok(employee)
    }

    /// Creates the first admin account when no employee exists yet.
    ///
    /// # Returns
    /// - `Ok(Some(Employee))` - Admin created
    /// - `Ok(None)` - Employee table already populated, nothing done
    /// - `Err(AppError)` - Hashing or database error
    pub async fn seed_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Employee>, AppError> {
        let repo = EmployeeRepository::new(self.db);

        if repo.count().await? > 0 {
            return Ok(None);
        }

        let password_hash = hash_password(password)?;
        let entity = repo
            .create(
                SEEDED_ADMIN_NAME.to_string(),
                username.to_string(),
                password_hash,
            )
            .await?;

        tracing::info!("Seeded admin employee '{}'", entity.username);

        Ok(Some(Employee::from_entity(entity)))
    }
}
