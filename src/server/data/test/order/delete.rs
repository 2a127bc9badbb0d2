use super::*;

/// Tests deleting an order removes its items.
///
/// Expected: Ok(1) and no items left
#[tokio::test]
async fn deletes_order_and_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_shop, product, order) = factory::helpers::create_order_with_product(db).await?;
    factory::create_order_item(db, order.id, product.id).await?;

    let deleted = OrderRepository::new(db).delete(order.id).await?;

    assert_eq!(deleted, 1);
    assert!(entity::prelude::OrderItem::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting an order that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(OrderRepository::new(db).delete(5).await?, 0);

    Ok(())
}
