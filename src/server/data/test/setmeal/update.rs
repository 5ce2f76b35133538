use super::*;

/// Tests updating a combo including its status.
///
/// Expected: Ok(Some) with updated fields
#[tokio::test]
async fn updates_fields_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let setmeal = factory::create_setmeal(db, category.id).await?;

    let repo = SetmealRepository::new(db);
    let updated = repo
        .update(
            setmeal.id,
            fields("Lunch Set", category.id),
            Some(SaleStatus::OffSale),
            4,
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Lunch Set");
    assert_eq!(updated.price, 5800);
    assert_eq!(updated.status, 0);
    assert_eq!(updated.update_user, 4);

    Ok(())
}

/// Tests updating a combo that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_combo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SetmealRepository::new(db);
    let result = repo.update(9999, fields("Ghost", 1), None, 1).await?;

    assert!(result.is_none());

    Ok(())
}
