use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Repository providing database operations for employee accounts.
pub struct EmployeeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmployeeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an enabled employee with an already hashed password.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created employee
    /// - `Err(DbErr)` - Database error, including a duplicate username
    pub async fn create(
        &self,
        name: String,
        username: String,
        password_hash: String,
    ) -> Result<entity::employee::Model, DbErr> {
        let now = Utc::now();

        entity::employee::ActiveModel {
            name: ActiveValue::Set(name),
            username: ActiveValue::Set(username),
            password: ActiveValue::Set(password_hash),
            status: ActiveValue::Set(1),
            create_time: ActiveValue::Set(now),
            update_time: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds an employee by login name.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::employee::Model>, DbErr> {
        entity::prelude::Employee::find()
            .filter(entity::employee::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Returns the total number of employees.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Employee::find().count(self.db).await
    }
}
