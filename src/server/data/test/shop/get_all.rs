use super::*;

/// Tests listing every shop.
///
/// Expected: Ok with shops ordered by id
#[tokio::test]
async fn lists_all_shops_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_shop(db, user.id).await?;
    let second = factory::create_shop(db, user.id).await?;

    let shops = ShopRepository::new(db).get_all(None).await?;

    assert_eq!(shops.len(), 2);
    assert_eq!(shops[0].id, first.id);
    assert_eq!(shops[1].id, second.id);

    Ok(())
}

/// Tests filtering shops by owner.
///
/// Expected: Ok with only the shops of the requested user
#[tokio::test]
async fn filters_by_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let alice_shop = factory::create_shop(db, alice.id).await?;
    factory::create_shop(db, bob.id).await?;

    let shops = ShopRepository::new(db).get_all(Some(alice.id)).await?;

    assert_eq!(shops.len(), 1);
    assert_eq!(shops[0].id, alice_shop.id);

    Ok(())
}
