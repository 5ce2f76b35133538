use super::*;

/// Tests deleting links by combo id.
///
/// Verifies that links are matched on the combo id, not on the link id.
///
/// Expected: Ok with links of the listed combo removed and others kept
#[tokio::test]
async fn deletes_links_by_setmeal_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let dish = factory::create_dish(db, category.id).await?;
    let (_, setmeal, _) = factory::helpers::create_setmeal_with_dish(db, &dish).await?;
    let (_, other, _) = factory::helpers::create_setmeal_with_dish(db, &dish).await?;

    let repo = SetmealDishRepository::new(db);
    let deleted = repo.delete_by_setmeal_ids(&[setmeal.id]).await?;

    assert_eq!(deleted, 1);

    let grouped = repo.get_by_setmeal_ids(&[setmeal.id, other.id]).await?;
    assert!(!grouped.contains_key(&setmeal.id));
    assert_eq!(grouped.get(&other.id).map(Vec::len), Some(1));

    Ok(())
}
