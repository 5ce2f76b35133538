use super::*;

/// Tests inserting flavors for a dish.
///
/// Verifies that every flavor is stamped with the dish id and that options are
/// stored as a JSON array string.
///
/// Expected: Ok with flavors in insertion order
#[tokio::test]
async fn creates_flavors_stamped_with_dish_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let dish = factory::create_dish(db, category.id).await?;

    let repo = DishFlavorRepository::new(db);
    let flavors = repo
        .create_many(
            dish.id,
            vec![
                flavor("Spice", &["Mild", "Hot"]),
                flavor("Temperature", &["Warm", "Cold"]),
            ],
            5,
        )
        .await?;

    assert_eq!(flavors.len(), 2);
    assert!(flavors.iter().all(|f| f.dish_id == dish.id));
    assert_eq!(flavors[0].name, "Spice");
    assert_eq!(flavors[0].options, vec!["Mild", "Hot"]);

    let stored = entity::prelude::DishFlavor::find_by_id(flavors[0].id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.value, r#"["Mild","Hot"]"#);
    assert_eq!(stored.create_user, 5);

    Ok(())
}

/// Tests inserting an empty flavor list.
///
/// Expected: Ok with no flavors created
#[tokio::test]
async fn empty_list_creates_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let dish = factory::create_dish(db, category.id).await?;

    let repo = DishFlavorRepository::new(db);
    let flavors = repo.create_many(dish.id, vec![], 1).await?;

    assert!(flavors.is_empty());
    assert!(repo.get_by_dish_ids(&[dish.id]).await?.is_empty());

    Ok(())
}
