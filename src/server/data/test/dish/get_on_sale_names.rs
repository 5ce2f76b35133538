use super::*;

/// Tests collecting names of on-sale dishes among the listed ids.
///
/// Expected: Ok with only the on-sale dish names
#[tokio::test]
async fn returns_only_on_sale_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let on_sale = factory::dish::DishFactory::new(db, category.id)
        .name("Spring Rolls")
        .build()
        .await?;
    let off_sale = factory::dish::DishFactory::new(db, category.id)
        .name("Dumplings")
        .status(0)
        .build()
        .await?;

    let repo = DishRepository::new(db);
    let names = repo.get_on_sale_names(&[on_sale.id, off_sale.id]).await?;

    assert_eq!(names, vec!["Spring Rolls".to_string()]);

    Ok(())
}
