use super::*;

/// Tests stopping sale of several dishes at once.
///
/// Expected: Ok(2) and both dishes read back as off-sale
#[tokio::test]
async fn updates_status_of_listed_dishes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let first = factory::create_dish(db, category.id).await?;
    let second = factory::create_dish(db, category.id).await?;
    let untouched = factory::create_dish(db, category.id).await?;

    let repo = DishRepository::new(db);
    let updated = repo
        .update_status_by_ids(SaleStatus::OffSale, &[first.id, second.id], 3)
        .await?;

    assert_eq!(updated, 2);
    for id in [first.id, second.id] {
        let dish = repo.get_by_id(id).await?.unwrap();
        assert_eq!(dish.status, 0);
        assert_eq!(dish.update_user, 3);
    }
    assert_eq!(repo.get_by_id(untouched.id).await?.unwrap().status, 1);

    Ok(())
}

/// Tests updating status with an empty id list.
///
/// Expected: Ok(0) without touching any dish
#[tokio::test]
async fn empty_id_list_updates_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DishRepository::new(db);
    let updated = repo
        .update_status_by_ids(SaleStatus::OffSale, &[], 1)
        .await?;

    assert_eq!(updated, 0);

    Ok(())
}

/// Tests updating status of dishes that do not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn nonexistent_ids_update_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DishRepository::new(db);
    let updated = repo
        .update_status_by_ids(SaleStatus::OnSale, &[404, 405], 1)
        .await?;

    assert_eq!(updated, 0);

    Ok(())
}
