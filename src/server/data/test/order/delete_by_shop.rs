use super::*;

/// Tests deleting the orders of one shop along with their items.
///
/// Expected: Ok(2), items gone and the other shop's order untouched
#[tokio::test]
async fn deletes_orders_of_shop_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (shop, product, order) = factory::helpers::create_order_with_product(db).await?;
    factory::create_order(db, shop.id).await?;
    factory::create_order_item(db, order.id, product.id).await?;
    let (_, _, other_order) = factory::helpers::create_order_with_product(db).await?;

    let deleted = OrderRepository::new(db).delete_by_shop(shop.id).await?;

    assert_eq!(deleted, 2);
    assert!(entity::prelude::OrderItem::find().all(db).await?.is_empty());

    let remaining = entity::prelude::Order::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, other_order.id);

    Ok(())
}
