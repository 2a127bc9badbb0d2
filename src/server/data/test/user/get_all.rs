use super::*;

/// Tests listing users.
///
/// Verifies that every user is returned and that the list starts with the most
/// recently registered one.
///
/// Expected: Ok with both users, newest first
#[tokio::test]
async fn lists_users_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let older = factory::create_user(db).await?;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let newer = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, newer.id);
    assert_eq!(users[1].id, older.id);

    Ok(())
}

/// Tests listing users on an empty table.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).get_all().await?;

    assert!(users.is_empty());

    Ok(())
}
