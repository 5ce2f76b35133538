use super::*;

/// Tests creating a combo.
///
/// Expected: Ok with combo persisted and audit columns stamped
#[tokio::test]
async fn creates_combo_with_audit_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::CategoryFactory::new(db)
        .kind(2)
        .build()
        .await?;

    let repo = SetmealRepository::new(db);
    let setmeal = repo
        .create(fields("Family Feast", category.id), SaleStatus::OffSale, 9)
        .await?;

    assert_eq!(setmeal.name, "Family Feast");
    assert_eq!(setmeal.status, 0);
    assert_eq!(setmeal.create_user, 9);
    assert!(repo.get_by_id(setmeal.id).await?.is_some());

    Ok(())
}
