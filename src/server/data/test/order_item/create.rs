use super::*;

/// Tests adding an item to an order.
///
/// Expected: Ok with the item linked to the order and product
#[tokio::test]
async fn creates_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_shop, product, order) = factory::helpers::create_order_with_product(db).await?;

    let repo = OrderItemRepository::new(db);
    let item = repo
        .create(CreateOrderItemParams {
            order_id: order.id,
            product_id: product.id,
            quantity: 2,
            price: Decimal::from(15000),
        })
        .await?;

    assert_eq!(item.order_id, order.id);
    assert_eq!(item.product_id, product.id);
    assert_eq!(item.quantity, 2);
    assert_eq!(item.price, Decimal::from(15000));
    assert_eq!(repo.get_by_order(order.id).await?.len(), 1);

    Ok(())
}
