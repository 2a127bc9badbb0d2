use super::*;

/// Tests creating an order.
///
/// Expected: Ok with the order persisted and no items
#[tokio::test]
async fn creates_order_without_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, shop) = factory::helpers::create_shop_with_owner(db).await?;

    let order = OrderRepository::new(db)
        .create(CreateOrderParams {
            shop_id: shop.id,
            customer_name: "John Doe".to_string(),
            customer_phone: "6281234567890".to_string(),
            customer_address: "Jl. Merdeka No. 123".to_string(),
            status: "pending".to_string(),
        })
        .await?;

    assert_eq!(order.shop_id, shop.id);
    assert_eq!(order.customer_name, "John Doe");
    assert_eq!(order.status, "pending");
    assert!(order.items.is_empty());

    Ok(())
}
