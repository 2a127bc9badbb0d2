use super::*;

/// Tests reserving less than the available stock.
///
/// Expected: Ok(true) and stock reduced by the quantity
#[tokio::test]
async fn decrements_available_stock() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, shop) = factory::helpers::create_shop_with_owner(db).await?;
    let product = factory::product::ProductFactory::new(db, shop.id)
        .stock(5)
        .build()
        .await?;

    let repo = ProductRepository::new(db);

    assert!(repo.reserve_stock(product.id, 3).await?);
    assert_eq!(repo.find_by_id(product.id).await?.unwrap().stock, 2);

    Ok(())
}

/// Tests reserving exactly the available stock.
///
/// Expected: Ok(true) and stock reaches zero
#[tokio::test]
async fn allows_draining_stock_to_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, shop) = factory::helpers::create_shop_with_owner(db).await?;
    let product = factory::product::ProductFactory::new(db, shop.id)
        .stock(4)
        .build()
        .await?;

    let repo = ProductRepository::new(db);

    assert!(repo.reserve_stock(product.id, 4).await?);
    assert_eq!(repo.find_by_id(product.id).await?.unwrap().stock, 0);

    Ok(())
}

/// Tests reserving more than the available stock.
///
/// Expected: Ok(false) and stock unchanged
#[tokio::test]
async fn refuses_to_oversell() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, shop) = factory::helpers::create_shop_with_owner(db).await?;
    let product = factory::product::ProductFactory::new(db, shop.id)
        .stock(2)
        .build()
        .await?;

    let repo = ProductRepository::new(db);

    assert!(!repo.reserve_stock(product.id, 3).await?);
    assert_eq!(repo.find_by_id(product.id).await?.unwrap().stock, 2);

    Ok(())
}

/// Tests that a reservation made inside a rolled back transaction leaves no trace.
///
/// Expected: stock unchanged after the transaction is dropped without commit
#[tokio::test]
async fn rolls_back_with_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_product_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, shop) = factory::helpers::create_shop_with_owner(db).await?;
    let product = factory::product::ProductFactory::new(db, shop.id)
        .stock(10)
        .build()
        .await?;

    {
        let txn = db.begin().await?;
        assert!(ProductRepository::new(&txn).reserve_stock(product.id, 4).await?);
        txn.rollback().await?;
    }

    let stock = ProductRepository::new(db)
        .find_by_id(product.id)
        .await?
        .unwrap()
        .stock;
    assert_eq!(stock, 10);

    Ok(())
}
