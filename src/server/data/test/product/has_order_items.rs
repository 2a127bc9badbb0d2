use super::*;

/// Tests detecting order items that reference a product.
///
/// Expected: Ok(true) once an item exists, Ok(false) before
#[tokio::test]
async fn detects_referencing_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_shop, product, order) = factory::helpers::create_order_with_product(db).await?;
    let repo = ProductRepository::new(db);

    assert!(!repo.has_order_items(product.id).await?);

    factory::create_order_item(db, order.id, product.id).await?;

    assert!(repo.has_order_items(product.id).await?);

    Ok(())
}
