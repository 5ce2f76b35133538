use super::*;

/// Tests getting the first page of combos.
///
/// Expected: Ok with the most recently updated combos first
#[tokio::test]
async fn gets_first_page_ordered_by_update_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let now = Utc::now();

    let older = factory::setmeal::SetmealFactory::new(db, category.id)
        .update_time(now - Duration::hours(1))
        .build()
        .await?;
    let newer = factory::setmeal::SetmealFactory::new(db, category.id)
        .update_time(now)
        .build()
        .await?;
    factory::setmeal::SetmealFactory::new(db, category.id)
        .update_time(now - Duration::hours(2))
        .build()
        .await?;

    let repo = SetmealRepository::new(db);
    let (setmeals, total) = repo.get_paginated(None, 0, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(setmeals.len(), 2);
    assert_eq!(setmeals[0].id, newer.id);
    assert_eq!(setmeals[1].id, older.id);

    Ok(())
}
