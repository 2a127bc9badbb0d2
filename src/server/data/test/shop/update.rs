use super::*;

/// Tests a partial update.
///
/// Verifies that provided fields change while omitted fields keep their values.
///
/// Expected: Ok(Some(shop)) with only the name changed
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let shop = factory::shop::ShopFactory::new(db, user.id)
        .subdomain("bakery")
        .description("Bread")
        .build()
        .await?;

    let repo = ShopRepository::new(db);
    let updated = repo
        .update(
            shop.id,
            UpdateShopParams {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.subdomain.as_deref(), Some("bakery"));
    assert_eq!(updated.description.as_deref(), Some("Bread"));

    Ok(())
}

/// Tests an update with no fields.
///
/// Expected: Ok(Some(shop)) unchanged
#[tokio::test]
async fn empty_update_returns_shop_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let shop = factory::create_shop(db, user.id).await?;

    let updated = ShopRepository::new(db)
        .update(shop.id, UpdateShopParams::default())
        .await?
        .unwrap();

    assert_eq!(updated.name, shop.name);
    assert_eq!(updated.subdomain, shop.subdomain);

    Ok(())
}

/// Tests updating a shop that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_shop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ShopRepository::new(db)
        .update(
            999,
            UpdateShopParams {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
