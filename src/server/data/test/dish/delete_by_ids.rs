use super::*;

/// Tests deleting several dishes by id.
///
/// Expected: Ok with deleted count and dishes gone
#[tokio::test]
async fn deletes_listed_dishes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let first = factory::create_dish(db, category.id).await?;
    let second = factory::create_dish(db, category.id).await?;
    let kept = factory::create_dish(db, category.id).await?;

    let repo = DishRepository::new(db);
    let deleted = repo.delete_by_ids(&[first.id, second.id, 9999]).await?;

    assert_eq!(deleted, 2);
    assert!(repo.get_by_id(first.id).await?.is_none());
    assert!(repo.get_by_id(second.id).await?.is_none());
    assert!(repo.get_by_id(kept.id).await?.is_some());

    Ok(())
}
