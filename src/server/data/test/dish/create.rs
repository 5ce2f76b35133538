use super::*;

/// Tests creating a dish.
///
/// Verifies that the repository stores every base field and stamps both audit
/// columns with the creating employee.
///
/// Expected: Ok with dish persisted
#[tokio::test]
async fn creates_dish_with_audit_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = DishRepository::new(db);
    let dish = repo
        .create(fields("Mapo Tofu", category.id), SaleStatus::OnSale, 7)
        .await?;

    assert_eq!(dish.name, "Mapo Tofu");
    assert_eq!(dish.category_id, category.id);
    assert_eq!(dish.price, 2800);
    assert_eq!(dish.status, 1);
    assert_eq!(dish.create_user, 7);
    assert_eq!(dish.update_user, 7);

    let stored = entity::prelude::Dish::find_by_id(dish.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}
