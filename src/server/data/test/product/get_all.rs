use super::*;

/// Tests listing products across shops and filtered by shop.
///
/// Expected: Ok with all products unfiltered and one shop's products when filtered
#[tokio::test]
async fn lists_and_filters_by_shop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, shop_a, product_a) =
        factory::helpers::create_product_with_dependencies(db).await?;
    let (_user, _shop_b, _product_b) =
        factory::helpers::create_product_with_dependencies(db).await?;

    let repo = ProductRepository::new(db);

    assert_eq!(repo.get_all(None).await?.len(), 2);

    let filtered = repo.get_all(Some(shop_a.id)).await?;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, product_a.id);

    Ok(())
}
