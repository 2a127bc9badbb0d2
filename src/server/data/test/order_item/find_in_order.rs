use super::*;

/// Tests that an item is only found through its own order.
///
/// Expected: Some for the owning order, None for another order
#[tokio::test]
async fn scopes_lookup_to_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (shop, product, order) = factory::helpers::create_order_with_product(db).await?;
    let other_order = factory::create_order(db, shop.id).await?;
    let item = factory::create_order_item(db, order.id, product.id).await?;

    let repo = OrderItemRepository::new(db);

    assert!(repo.find_in_order(order.id, item.id).await?.is_some());
    assert!(repo.find_in_order(other_order.id, item.id).await?.is_none());

    Ok(())
}
