use super::*;

/// Tests creating a product.
///
/// Expected: Ok with every field persisted
#[tokio::test]
async fn creates_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, shop) = factory::helpers::create_shop_with_owner(db).await?;

    let repo = ProductRepository::new(db);
    let product = repo
        .create(CreateProductParams {
            shop_id: shop.id,
            name: "Sourdough".to_string(),
            description: Some("Slow fermented".to_string()),
            price: Decimal::from(6),
            stock: 12,
            image_url: None,
            is_active: true,
        })
        .await?;

    assert_eq!(product.shop_id, shop.id);
    assert_eq!(product.name, "Sourdough");
    assert_eq!(product.price, Decimal::from(6));
    assert_eq!(product.stock, 12);
    assert!(product.is_active);

    let stored = repo.find_by_id(product.id).await?.unwrap();
    assert_eq!(stored.description.as_deref(), Some("Slow fermented"));

    Ok(())
}

/// Tests creating a product for a shop that does not exist.
///
/// Expected: Err with a foreign key violation
#[tokio::test]
async fn rejects_unknown_shop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ProductRepository::new(db)
        .create(CreateProductParams {
            shop_id: 999,
            name: "Orphan".to_string(),
            description: None,
            price: Decimal::from(1),
            stock: 1,
            image_url: None,
            is_active: true,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
