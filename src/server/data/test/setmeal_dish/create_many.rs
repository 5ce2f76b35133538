use super::*;

/// Tests linking dishes to a combo.
///
/// Verifies that each link is stamped with the combo id and keeps the submitted
/// name, price and copies.
///
/// Expected: Ok with links readable by combo id
#[tokio::test]
async fn creates_links_stamped_with_setmeal_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let dish = factory::create_dish(db, category.id).await?;
    let setmeal = factory::create_setmeal(db, category.id).await?;

    let repo = SetmealDishRepository::new(db);
    let links = repo
        .create_many(
            setmeal.id,
            vec![SetmealDishParams {
                dish_id: dish.id,
                name: dish.name.clone(),
                price: dish.price,
                copies: 2,
            }],
            1,
        )
        .await?;

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].setmeal_id, setmeal.id);
    assert_eq!(links[0].copies, 2);

    let mut stored = repo.get_by_setmeal_ids(&[setmeal.id]).await?;
    assert_eq!(stored.remove(&setmeal.id), Some(links));

    Ok(())
}
