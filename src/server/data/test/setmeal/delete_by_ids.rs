use super::*;

/// Tests on-sale lookup and deletion of combos.
///
/// Verifies that only on-sale combos are reported and that deletion removes
/// the listed combos.
///
/// Expected: Ok with the on-sale name reported and both combos deleted
#[tokio::test]
async fn reports_on_sale_and_deletes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let on_sale = factory::setmeal::SetmealFactory::new(db, category.id)
        .name("Party Pack")
        .build()
        .await?;
    let off_sale = factory::setmeal::SetmealFactory::new(db, category.id)
        .status(0)
        .build()
        .await?;

    let repo = SetmealRepository::new(db);

    let names = repo.get_on_sale_names(&[on_sale.id, off_sale.id]).await?;
    assert_eq!(names, vec!["Party Pack".to_string()]);

    let deleted = repo.delete_by_ids(&[on_sale.id, off_sale.id]).await?;
    assert_eq!(deleted, 2);
    assert!(repo.get_by_id(on_sale.id).await?.is_none());

    Ok(())
}
