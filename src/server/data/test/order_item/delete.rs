use super::*;

/// Tests deleting an item.
///
/// Expected: Ok(1) and the order has no items left
#[tokio::test]
async fn deletes_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_shop, product, order) = factory::helpers::create_order_with_product(db).await?;
    let item = factory::create_order_item(db, order.id, product.id).await?;

    let repo = OrderItemRepository::new(db);

    assert_eq!(repo.delete(order.id, item.id).await?, 1);
    assert!(repo.get_by_order(order.id).await?.is_empty());

    Ok(())
}

/// Tests deleting an item through the wrong order.
///
/// Expected: Ok(0)
#[tokio::test]
async fn leaves_item_of_other_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (shop, product, order) = factory::helpers::create_order_with_product(db).await?;
    let other_order = factory::create_order(db, shop.id).await?;
    let item = factory::create_order_item(db, order.id, product.id).await?;

    assert_eq!(
        OrderItemRepository::new(db)
            .delete(other_order.id, item.id)
            .await?,
        0
    );

    Ok(())
}
