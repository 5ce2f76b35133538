use super::*;

/// Tests getting the second page of dishes.
///
/// Verifies that pages are ordered by update time descending and hold at most
/// the requested number of dishes.
///
/// Expected: Ok with the remaining dishes and the full total
#[tokio::test]
async fn gets_second_page_ordered_by_update_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let now = Utc::now();

    // Dish 0 is the most recently updated
    for i in 0..12 {
        factory::dish::DishFactory::new(db, category.id)
            .name(format!("Dish {:02}", i))
            .update_time(now - Duration::minutes(i))
            .build()
            .await?;
    }

    let repo = DishRepository::new(db);
    let (dishes, total) = repo.get_paginated(None, 1, 10).await?;

    assert_eq!(total, 12);
    assert_eq!(dishes.len(), 2);
    assert_eq!(dishes[0].name, "Dish 10");
    assert_eq!(dishes[1].name, "Dish 11");

    Ok(())
}

/// Tests filtering the page by a name substring.
///
/// Expected: Ok with only matching dishes counted
#[tokio::test]
async fn filters_by_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    for name in ["Kung Pao Chicken", "Chicken Soup", "Fried Rice"] {
        factory::dish::DishFactory::new(db, category.id)
            .name(name)
            .build()
            .await?;
    }

    let repo = DishRepository::new(db);
    let (dishes, total) = repo.get_paginated(Some("Chicken"), 0, 10).await?;

    assert_eq!(total, 2);
    assert!(dishes.iter().all(|d| d.name.contains("Chicken")));

    Ok(())
}

/// Tests that an empty name filter is ignored.
///
/// Expected: Ok with every dish
#[tokio::test]
async fn ignores_empty_name_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    factory::create_dish(db, category.id).await?;
    factory::create_dish(db, category.id).await?;

    let repo = DishRepository::new(db);
    let (_, total) = repo.get_paginated(Some(""), 0, 10).await?;

    assert_eq!(total, 2);

    Ok(())
}
