use super::*;

/// Tests loading an order with its items.
///
/// Expected: Ok(Some(order)) carrying both items in insertion order
#[tokio::test]
async fn loads_order_with_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_shop, product, order) = factory::helpers::create_order_with_product(db).await?;
    let first = factory::create_order_item(db, order.id, product.id).await?;
    let second = factory::order_item::OrderItemFactory::new(db, order.id, product.id)
        .quantity(4)
        .build()
        .await?;

    let loaded = OrderRepository::new(db).find_by_id(order.id).await?.unwrap();

    assert_eq!(loaded.id, order.id);
    assert_eq!(loaded.items.len(), 2);
    assert_eq!(loaded.items[0].id, first.id);
    assert_eq!(loaded.items[1].id, second.id);
    assert_eq!(loaded.items[1].quantity, 4);

    Ok(())
}

/// Tests loading an order that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(OrderRepository::new(db).find_by_id(1).await?.is_none());
    assert!(!OrderRepository::new(db).exists(1).await?);

    Ok(())
}
