use super::*;

/// Tests deleting a shop cascades to its products and orders.
///
/// Expected: Ok(1) and no remaining products or orders for the shop
#[tokio::test]
async fn deletes_shop_and_cascades() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, shop, _product) =
        factory::helpers::create_product_with_dependencies(db).await?;
    factory::create_order(db, shop.id).await?;

    let deleted = ShopRepository::new(db).delete(shop.id).await?;

    assert_eq!(deleted, 1);
    assert!(entity::prelude::Product::find().all(db).await?.is_empty());
    assert!(entity::prelude::Order::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting a shop that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_shop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = ShopRepository::new(db).delete(42).await?;

    assert_eq!(deleted, 0);

    Ok(())
}
