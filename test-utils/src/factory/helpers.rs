//! Shared helper utilities for factory methods.
//!
//! Provides unique ID generation and convenience methods for creating entities
//! together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a category, an on-sale dish in it, and two flavors for that dish.
///
/// # Returns
/// - `Ok((category, dish, flavors))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_dish_with_flavors(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::category::Model,
        entity::dish::Model,
        Vec<entity::dish_flavor::Model>,
    ),
    DbErr,
> {
    let category = crate::factory::category::create_category(db).await?;
    let dish = crate::factory::dish::create_dish(db, category.id).await?;

    let spice = crate::factory::dish_flavor::DishFlavorFactory::new(db, dish.id)
        .name("Spice")
        .options(&["Mild", "Medium", "Hot"])
        .build()
        .await?;
    let sweetness = crate::factory::dish_flavor::DishFlavorFactory::new(db, dish.id)
        .name("Sweetness")
        .options(&["None", "Half", "Full"])
        .build()
        .await?;

    Ok((category, dish, vec![spice, sweetness]))
}

/// Creates a category, an on-sale combo in it, and one link to the provided dish.
///
/// # Returns
/// - `Ok((category, setmeal, link))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_setmeal_with_dish(
    db: &DatabaseConnection,
    dish: &entity::dish::Model,
) -> Result<
    (
        entity::category::Model,
        entity::setmeal::Model,
        entity::setmeal_dish::Model,
    ),
    DbErr,
> {
    let category = crate::factory::category::CategoryFactory::new(db)
        .kind(2)
        .build()
        .await?;
    let setmeal = crate::factory::setmeal::create_setmeal(db, category.id).await?;
    let link = crate::factory::setmeal_dish::create_setmeal_dish(db, setmeal.id, dish).await?;

    Ok((category, setmeal, link))
}
