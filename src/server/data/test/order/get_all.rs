use super::*;
use chrono::{Duration, Utc};

/// Tests listing orders.
///
/// Verifies that orders come back newest first and that each order only
/// carries its own items.
///
/// Expected: Ok with orders sorted by creation time descending
#[tokio::test]
async fn lists_orders_newest_first_with_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, shop, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let older = factory::order::OrderFactory::new(db, shop.id)
        .created_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;
    let newer = factory::create_order(db, shop.id).await?;
    factory::create_order_item(db, older.id, product.id).await?;

    let orders = OrderRepository::new(db).get_all(None).await?;

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, newer.id);
    assert!(orders[0].items.is_empty());
    assert_eq!(orders[1].id, older.id);
    assert_eq!(orders[1].items.len(), 1);

    Ok(())
}

/// Tests filtering orders by shop.
///
/// Expected: Ok with only the requested shop's orders
#[tokio::test]
async fn filters_by_shop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, shop_a) = factory::helpers::create_shop_with_owner(db).await?;
    let (_user, shop_b) = factory::helpers::create_shop_with_owner(db).await?;
    let order_a = factory::create_order(db, shop_a.id).await?;
    factory::create_order(db, shop_b.id).await?;

    let orders = OrderRepository::new(db).get_all(Some(shop_a.id)).await?;

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, order_a.id);

    Ok(())
}

/// Tests listing when there are no orders.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(OrderRepository::new(db).get_all(None).await?.is_empty());

    Ok(())
}
