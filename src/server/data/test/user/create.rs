use super::*;

/// Tests creating a new user.
///
/// Verifies that the user repository inserts a user with a generated UUID and
/// stores the provided password hash as-is.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            email: "jane@example.com".to_string(),
            name: "Jane".to_string(),
            password_hash: "hashed".to_string(),
        })
        .await?;

    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.name, "Jane");
    assert_eq!(user.password_hash, "hashed");
    assert!(repo.find_by_id(user.id).await?.is_some());

    Ok(())
}

/// Tests inserting a second user with an email that is already registered.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            email: "taken@example.com".to_string(),
            name: "Other".to_string(),
            password_hash: "hashed".to_string(),
        })
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
