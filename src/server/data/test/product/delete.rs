use super::*;

/// Tests deleting an unreferenced product.
///
/// Expected: Ok(1) and the product is gone
#[tokio::test]
async fn deletes_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _shop, product) = factory::helpers::create_product_with_dependencies(db).await?;

    let repo = ProductRepository::new(db);

    assert_eq!(repo.delete(product.id).await?, 1);
    assert!(repo.find_by_id(product.id).await?.is_none());

    Ok(())
}

/// Tests that order items restrict deleting the product they reference.
///
/// Expected: Err with a foreign key violation and the product still present
#[tokio::test]
async fn refuses_to_delete_ordered_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_shop, product, order) = factory::helpers::create_order_with_product(db).await?;
    factory::create_order_item(db, order.id, product.id).await?;

    let repo = ProductRepository::new(db);
    let result = repo.delete(product.id).await;

    assert!(result.is_err());
    assert!(repo.find_by_id(product.id).await?.is_some());

    Ok(())
}

/// Tests deleting a product that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(ProductRepository::new(db).delete(7).await?, 0);

    Ok(())
}
