use super::*;

/// Tests deleting all flavors of a dish.
///
/// Expected: Ok with deleted count and flavors of other dishes kept
#[tokio::test]
async fn deletes_only_flavors_of_listed_dishes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, dish, _) = factory::helpers::create_dish_with_flavors(db).await?;
    let other = factory::create_dish(db, category.id).await?;
    factory::create_dish_flavor(db, other.id).await?;

    let repo = DishFlavorRepository::new(db);
    let deleted = repo.delete_by_dish_ids(&[dish.id]).await?;

    assert_eq!(deleted, 2);
    let remaining = repo.get_by_dish_ids(&[dish.id, other.id]).await?;
    assert!(!remaining.contains_key(&dish.id));
    assert_eq!(remaining.get(&other.id).map(Vec::len), Some(1));

    Ok(())
}
