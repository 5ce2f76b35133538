use super::*;

/// Tests starting sale of combos.
///
/// Expected: Ok with updated count and combos on sale
#[tokio::test]
async fn starts_sale_of_listed_combos() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let setmeal = factory::setmeal::SetmealFactory::new(db, category.id)
        .status(0)
        .build()
        .await?;

    let repo = SetmealRepository::new(db);
    let updated = repo
        .update_status_by_ids(SaleStatus::OnSale, &[setmeal.id, 9999], 2)
        .await?;

    assert_eq!(updated, 1);
    assert_eq!(repo.get_by_id(setmeal.id).await?.unwrap().status, 1);

    Ok(())
}
