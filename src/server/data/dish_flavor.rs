use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::dish::{DishFlavor, DishFlavorParams};

/// Repository for the flavor children of dishes.
///
/// Option lists are stored as a JSON array string and decoded into `DishFlavor`.
pub struct DishFlavorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DishFlavorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts every flavor for the dish, stamping each with `dish_id`.
    ///
    /// # Returns
    /// - `Ok(Vec<DishFlavor>)` - Created flavors in insertion order, empty if none given
    /// - `Err(DbErr)` - Database error during insert, or failure to encode options
    pub async fn create_many(
        &self,
        dish_id: i32,
        flavors: Vec<DishFlavorParams>,
        employee_id: i32,
    ) -> Result<Vec<DishFlavor>, DbErr> {
        let now = Utc::now();
        let mut created = Vec::with_capacity(flavors.len());

        for flavor in flavors {
            let value = serde_json::to_string(&flavor.options)
                .map_err(|e| DbErr::Custom(format!("Failed to encode flavor options: {}", e)))?;

            let entity = entity::dish_flavor::ActiveModel {
                dish_id: ActiveValue::Set(dish_id),
                name: ActiveValue::Set(flavor.name),
                value: ActiveValue::Set(value),
                create_time: ActiveValue::Set(now),
                update_time: ActiveValue::Set(now),
                create_user: ActiveValue::Set(employee_id),
                update_user: ActiveValue::Set(employee_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            created.push(DishFlavor::from_entity(entity)?);
        }

        Ok(created)
    }

    /// Gets the flavors of several dishes in one query, grouped by dish ID.
    ///
    /// Dishes without flavors are absent from the map.
    pub async fn get_by_dish_ids(
        &self,
        dish_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<DishFlavor>>, DbErr> {
        if dish_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::DishFlavor::find()
            .filter(entity::dish_flavor::Column::DishId.is_in(dish_ids.to_vec()))
            .order_by_asc(entity::dish_flavor::Column::Id)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<DishFlavor>> = HashMap::new();
        for entity in entities {
            let flavor = DishFlavor::from_entity(entity)?;
            grouped.entry(flavor.dish_id).or_default().push(flavor);
        }

        Ok(grouped)
    }

    /// Deletes every flavor belonging to the listed dishes.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of flavors deleted
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete_by_dish_ids(&self, dish_ids: &[i32]) -> Result<u64, DbErr> {
        if dish_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::DishFlavor::delete_many()
            .filter(entity::dish_flavor::Column::DishId.is_in(dish_ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
