use super::*;

/// Tests a partial product update.
///
/// Expected: Ok(Some(product)) with price and active flag changed, stock untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _shop, product) = factory::helpers::create_product_with_dependencies(db).await?;

    let updated = ProductRepository::new(db)
        .update(
            product.id,
            UpdateProductParams {
                price: Some(Decimal::from(25)),
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.price, Decimal::from(25));
    assert!(!updated.is_active);
    assert_eq!(updated.stock, product.stock);
    assert_eq!(updated.name, product.name);

    Ok(())
}

/// Tests updating a product that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ProductRepository::new(db)
        .update(
            404,
            UpdateProductParams {
                stock: Some(1),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
