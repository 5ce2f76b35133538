use super::*;

/// Tests listing on-sale dishes of a category.
///
/// Verifies that off-sale dishes and dishes of other categories are excluded
/// when no status is requested.
///
/// Expected: Ok with only the on-sale dish of the category
#[tokio::test]
async fn lists_on_sale_dishes_of_category_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let other = factory::create_category(db).await?;

    let on_sale = factory::create_dish(db, category.id).await?;
    factory::dish::DishFactory::new(db, category.id)
        .status(0)
        .build()
        .await?;
    factory::create_dish(db, other.id).await?;

    let repo = DishRepository::new(db);
    let dishes = repo
        .get_by_filter(&DishListFilter {
            category_id: Some(category.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0].id, on_sale.id);

    Ok(())
}

/// Tests that the name filter takes precedence over the category.
///
/// Expected: Ok with the matching dish from another category
#[tokio::test]
async fn name_filter_takes_precedence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let other = factory::create_category(db).await?;

    factory::dish::DishFactory::new(db, category.id)
        .name("Steamed Fish")
        .build()
        .await?;
    let noodles = factory::dish::DishFactory::new(db, other.id)
        .name("Beef Noodles")
        .build()
        .await?;

    let repo = DishRepository::new(db);
    let dishes = repo
        .get_by_filter(&DishListFilter {
            category_id: Some(category.id),
            name: Some("Noodles".to_string()),
            status: None,
        })
        .await?;

    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0].id, noodles.id);

    Ok(())
}

/// Tests listing off-sale dishes when explicitly requested.
///
/// Expected: Ok with only the off-sale dish
#[tokio::test]
async fn lists_requested_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    factory::create_dish(db, category.id).await?;
    let off_sale = factory::dish::DishFactory::new(db, category.id)
        .status(0)
        .build()
        .await?;

    let repo = DishRepository::new(db);
    let dishes = repo
        .get_by_filter(&DishListFilter {
            category_id: Some(category.id),
            name: None,
            status: Some(SaleStatus::OffSale),
        })
        .await?;

    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0].id, off_sale.id);

    Ok(())
}
