//! Combo (setmeal) factory for creating test combo entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test combos with customizable fields.
pub struct SetmealFactory<'a> {
    db: &'a DatabaseConnection,
    category_id: i32,
    name: String,
    price: i64,
    status: i32,
    update_time: DateTime<Utc>,
}

impl<'a> SetmealFactory<'a> {
    /// Creates a new SetmealFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Combo {id}"`
    /// - price: `3800`
    /// - status: `1` (on-sale)
    /// - update_time: now
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            category_id,
            name: format!("Combo {}", id),
            price: 3800,
            status: 1,
            update_time: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    /// Sets the sale status (1 = on-sale, 0 = off-sale).
    pub fn status(mut self, status: i32) -> Self {
        self.status = status;
        self
    }

    pub fn update_time(mut self, update_time: DateTime<Utc>) -> Self {
        self.update_time = update_time;
        self
    }

    /// Builds and inserts the combo entity into the database.
    pub async fn build(self) -> Result<entity::setmeal::Model, DbErr> {
        entity::setmeal::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            category_id: ActiveValue::Set(self.category_id),
            price: ActiveValue::Set(self.price),
            image: ActiveValue::Set(String::new()),
            description: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            create_time: ActiveValue::Set(self.update_time),
            update_time: ActiveValue::Set(self.update_time),
            create_user: ActiveValue::Set(1),
            update_user: ActiveValue::Set(1),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an on-sale combo with default values in the given category.
pub async fn create_setmeal(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::setmeal::Model, DbErr> {
    SetmealFactory::new(db, category_id).build().await
}
