use super::*;

/// Tests detecting a subdomain used by another shop.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_taken_subdomain() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::shop::ShopFactory::new(db, user.id)
        .subdomain("bakery")
        .build()
        .await?;

    let repo = ShopRepository::new(db);

    assert!(repo.subdomain_in_use("bakery", None).await?);
    assert!(!repo.subdomain_in_use("florist", None).await?);

    Ok(())
}

/// Tests that a shop's own subdomain does not count as taken when excluded.
///
/// Expected: Ok(false) when the owning shop is excluded
#[tokio::test]
async fn ignores_excluded_shop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let shop = factory::shop::ShopFactory::new(db, user.id)
        .subdomain("bakery")
        .build()
        .await?;

    let repo = ShopRepository::new(db);

    assert!(!repo.subdomain_in_use("bakery", Some(shop.id)).await?);

    Ok(())
}
