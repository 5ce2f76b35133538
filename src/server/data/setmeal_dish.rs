use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::setmeal::SetmealDishParams;

/// Repository for the dish links of combos.
pub struct SetmealDishRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SetmealDishRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts every link for the combo, stamping each with `setmeal_id`.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Created links in insertion order, empty if none given
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_many(
        &self,
        setmeal_id: i32,
        dishes: Vec<SetmealDishParams>,
        employee_id: i32,
    ) -> Result<Vec<entity::setmeal_dish::Model>, DbErr> {
        let now = Utc::now();
        let mut created = Vec::with_capacity(dishes.len());

        for dish in dishes {
            let link = entity::setmeal_dish::ActiveModel {
                setmeal_id: ActiveValue::Set(setmeal_id),
                dish_id: ActiveValue::Set(dish.dish_id),
                name: ActiveValue::Set(dish.name),
                price: ActiveValue::Set(dish.price),
                copies: ActiveValue::Set(dish.copies),
                create_time: ActiveValue::Set(now),
                update_time: ActiveValue::Set(now),
                create_user: ActiveValue::Set(employee_id),
                update_user: ActiveValue::Set(employee_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            created.push(link);
        }

        Ok(created)
    }

    /// Gets the links of several combos in one query, grouped by combo ID.
    pub async fn get_by_setmeal_ids(
        &self,
        setmeal_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::setmeal_dish::Model>>, DbErr> {
        if setmeal_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::SetmealDish::find()
            .filter(entity::setmeal_dish::Column::SetmealId.is_in(setmeal_ids.to_vec()))
            .order_by_asc(entity::setmeal_dish::Column::Id)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<entity::setmeal_dish::Model>> = HashMap::new();
        for link in links {
            grouped.entry(link.setmeal_id).or_default().push(link);
        }

        Ok(grouped)
    }

    /// Deletes every link belonging to the listed combos.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of links deleted
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete_by_setmeal_ids(&self, setmeal_ids: &[i32]) -> Result<u64, DbErr> {
        if setmeal_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::SetmealDish::delete_many()
            .filter(entity::setmeal_dish::Column::SetmealId.is_in(setmeal_ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
