//! Employee factory for creating test employee entities.
//!
//! Passwords are stored exactly as given, so tests exercising login must pass
//! an already hashed value.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test employees with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let employee = EmployeeFactory::new(&db)
///     .username("admin")
///     .password(hash)
///     .status(0)
///     .build()
///     .await?;
/// ```
pub struct EmployeeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    username: String,
    password: String,
    status: i32,
}

impl<'a> EmployeeFactory<'a> {
    /// Creates a new EmployeeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Employee {id}"`
    /// - username: `"employee{id}"`
    /// - password: `"not-a-hash"` (login always fails against it)
    /// - status: `1` (enabled)
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Employee {}", id),
            username: format!("employee{}", id),
            password: "not-a-hash".to_string(),
            status: 1,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the stored password hash.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the account status (1 = enabled, 0 = disabled).
    pub fn status(mut self, status: i32) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the employee entity into the database.
    pub async fn build(self) -> Result<entity::employee::Model, DbErr> {
        let now = chrono::Utc::now();

        entity::employee::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            username: ActiveValue::Set(self.username),
            password: ActiveValue::Set(self.password),
            status: ActiveValue::Set(self.status),
            create_time: ActiveValue::Set(now),
            update_time: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an enabled employee with default values.
pub async fn create_employee(db: &DatabaseConnection) -> Result<entity::employee::Model, DbErr> {
    EmployeeFactory::new(db).build().await
}
