use super::*;

/// Tests loading flavors of several dishes at once.
///
/// Expected: Ok with flavors grouped per dish and dishes without flavors absent
#[tokio::test]
async fn groups_flavors_by_dish() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, dish, _) = factory::helpers::create_dish_with_flavors(db).await?;
    let plain = factory::create_dish(db, category.id).await?;

    let repo = DishFlavorRepository::new(db);
    let grouped = repo.get_by_dish_ids(&[dish.id, plain.id]).await?;

    assert_eq!(grouped.get(&dish.id).map(Vec::len), Some(2));
    assert!(!grouped.contains_key(&plain.id));

    Ok(())
}

/// Tests that a malformed stored option list is reported as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_malformed_option_list() -> Result<(), DbErr> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let dish = factory::create_dish(db, category.id).await?;
    let flavor = factory::create_dish_flavor(db, dish.id).await?;

    let mut active: entity::dish_flavor::ActiveModel = flavor.into();
    active.value = ActiveValue::Set("not json".to_string());
    active.update(db).await?;

    let repo = DishFlavorRepository::new(db);
    let result = repo.get_by_dish_ids(&[dish.id]).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
