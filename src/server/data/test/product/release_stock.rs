use super::*;

/// Tests returning units to stock.
///
/// Expected: Ok(true) and stock increased by the quantity
#[tokio::test]
async fn increments_stock() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, shop) = factory::helpers::create_shop_with_owner(db).await?;
    let product = factory::product::ProductFactory::new(db, shop.id)
        .stock(1)
        .build()
        .await?;

    let repo = ProductRepository::new(db);

    assert!(repo.release_stock(product.id, 4).await?);
    assert_eq!(repo.find_by_id(product.id).await?.unwrap().stock, 5);

    Ok(())
}

/// Tests returning units to a product that no longer exists.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!ProductRepository::new(db).release_stock(123, 1).await?);

    Ok(())
}

/// Tests returning units to a product already at the column maximum.
///
/// Expected: Ok(false) and stock unchanged, so the row stays readable
#[tokio::test]
async fn refuses_to_overflow_stock() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, shop) = factory::helpers::create_shop_with_owner(db).await?;
    let product = factory::product::ProductFactory::new(db, shop.id)
        .stock(i32::MAX - 1)
        .build()
        .await?;

    let repo = ProductRepository::new(db);

    assert!(!repo.release_stock(product.id, 2).await?);
    assert!(repo.release_stock(product.id, 1).await?);
    assert!(!repo.release_stock(product.id, 1).await?);
    assert_eq!(repo.find_by_id(product.id).await?.unwrap().stock, i32::MAX);

    Ok(())
}
