//! Combo link factory for attaching dishes to combos in tests.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating a link between a combo and a dish.
///
/// The dish name and price are copied from the provided dish model, the same
/// snapshot the service stores.
pub struct SetmealDishFactory<'a> {
    db: &'a DatabaseConnection,
    setmeal_id: i32,
    dish_id: i32,
    name: String,
    price: i64,
    copies: i32,
}

impl<'a> SetmealDishFactory<'a> {
    /// Creates a new SetmealDishFactory with one copy of the dish.
    pub fn new(db: &'a DatabaseConnection, setmeal_id: i32, dish: &entity::dish::Model) -> Self {
        Self {
            db,
            setmeal_id,
            dish_id: dish.id,
            name: dish.name.clone(),
            price: dish.price,
            copies: 1,
        }
    }

    pub fn copies(mut self, copies: i32) -> Self {
        self.copies = copies;
        self
    }

    /// Builds and inserts the link entity into the database.
    pub async fn build(self) -> Result<entity::setmeal_dish::Model, DbErr> {
        let now = chrono::Utc::now();

        entity::setmeal_dish::ActiveModel {
            id: ActiveValue::NotSet,
            setmeal_id: ActiveValue::Set(self.setmeal_id),
            dish_id: ActiveValue::Set(self.dish_id),
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            copies: ActiveValue::Set(self.copies),
            create_time: ActiveValue::Set(now),
            update_time: ActiveValue::Set(now),
            create_user: ActiveValue::Set(1),
            update_user: ActiveValue::Set(1),
        }
        .insert(self.db)
        .await
    }
}

/// Links one copy of `dish` to the combo.
pub async fn create_setmeal_dish(
    db: &DatabaseConnection,
    setmeal_id: i32,
    dish: &entity::dish::Model,
) -> Result<entity::setmeal_dish::Model, DbErr> {
    SetmealDishFactory::new(db, setmeal_id, dish).build().await
}
