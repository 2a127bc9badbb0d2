use super::*;

/// Tests a partial order update.
///
/// Expected: Ok(Some(order)) with the new status and items still attached
#[tokio::test]
async fn updates_status_and_keeps_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_shop, product, order) = factory::helpers::create_order_with_product(db).await?;
    factory::create_order_item(db, order.id, product.id).await?;

    let updated = OrderRepository::new(db)
        .update(
            order.id,
            UpdateOrderParams {
                status: Some("completed".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, "completed");
    assert_eq!(updated.customer_name, order.customer_name);
    assert_eq!(updated.items.len(), 1);

    Ok(())
}

/// Tests updating an order that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OrderRepository::new(db)
        .update(
            77,
            UpdateOrderParams {
                status: Some("completed".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
