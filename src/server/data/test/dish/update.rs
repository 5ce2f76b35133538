use super::*;

/// Tests updating the base fields of a dish.
///
/// Verifies that fields are overwritten, the status is kept when not given,
/// and the update audit column is stamped.
///
/// Expected: Ok(Some) with updated dish
#[tokio::test]
async fn updates_fields_and_keeps_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let dish = factory::dish::DishFactory::new(db, category.id)
        .status(0)
        .build()
        .await?;

    let repo = DishRepository::new(db);
    let updated = repo
        .update(dish.id, fields("Renamed", category.id), None, 42)
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.description.as_deref(), Some("House special"));
    assert_eq!(updated.status, 0);
    assert_eq!(updated.update_user, 42);
    assert_eq!(updated.create_user, dish.create_user);

    Ok(())
}

/// Tests updating a dish that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_dish() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DishRepository::new(db);
    let result = repo
        .update(9999, fields("Ghost", 1), Some(SaleStatus::OnSale), 1)
        .await?;

    assert!(result.is_none());

    Ok(())
}
