use super::*;

/// Tests a partial item update.
///
/// Expected: Ok(Some(item)) with the new quantity and the old price
#[tokio::test]
async fn updates_quantity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_shop, product, order) = factory::helpers::create_order_with_product(db).await?;
    let item = factory::create_order_item(db, order.id, product.id).await?;

    let updated = OrderItemRepository::new(db)
        .update(
            order.id,
            item.id,
            UpdateOrderItemParams {
                quantity: Some(6),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.quantity, 6);
    assert_eq!(updated.price, item.price);

    Ok(())
}

/// Tests updating an item through the wrong order.
///
/// Expected: Ok(None) and the item untouched
#[tokio::test]
async fn ignores_item_of_other_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (shop, product, order) = factory::helpers::create_order_with_product(db).await?;
    let other_order = factory::create_order(db, shop.id).await?;
    let item = factory::create_order_item(db, order.id, product.id).await?;

    let repo = OrderItemRepository::new(db);
    let result = repo
        .update(
            other_order.id,
            item.id,
            UpdateOrderItemParams {
                quantity: Some(9),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());
    assert_eq!(
        repo.find_in_order(order.id, item.id).await?.unwrap().quantity,
        item.quantity
    );

    Ok(())
}
