//! Dish flavor factory for creating test flavor entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test flavors attached to a dish.
///
/// The option list is stored as a JSON array string, matching the column
/// format the service writes.
pub struct DishFlavorFactory<'a> {
    db: &'a DatabaseConnection,
    dish_id: i32,
    name: String,
    options: Vec<String>,
}

impl<'a> DishFlavorFactory<'a> {
    /// Creates a new DishFlavorFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Flavor {id}"`
    /// - options: `["Regular"]`
    pub fn new(db: &'a DatabaseConnection, dish_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            dish_id,
            name: format!("Flavor {}", id),
            options: vec!["Regular".to_string()],
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|o| o.to_string()).collect();
        self
    }

    /// Builds and inserts the flavor entity into the database.
    pub async fn build(self) -> Result<entity::dish_flavor::Model, DbErr> {
        let now = chrono::Utc::now();
        let value = serde_json::to_string(&self.options)
            .map_err(|e| DbErr::Custom(format!("Failed to encode flavor options: {}", e)))?;

        entity::dish_flavor::ActiveModel {
            id: ActiveValue::NotSet,
            dish_id: ActiveValue::Set(self.dish_id),
            name: ActiveValue::Set(self.name),
            value: ActiveValue::Set(value),
            create_time: ActiveValue::Set(now),
            update_time: ActiveValue::Set(now),
            create_user: ActiveValue::Set(1),
            update_user: ActiveValue::Set(1),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flavor with default values for the given dish.
pub async fn create_dish_flavor(
    db: &DatabaseConnection,
    dish_id: i32,
) -> Result<entity::dish_flavor::Model, DbErr> {
    DishFlavorFactory::new(db, dish_id).build().await
}
