use super::*;

/// Tests a request carrying a valid bearer token.
///
/// Verifies that the guard accepts a token issued by the same token service and
/// returns the caller's claims.
///
/// Expected: Ok(Claims) with the issuing user's id
#[test]
fn accepts_valid_bearer_token() {
    let tokens = TokenService::new("secret", Duration::hours(1));
    let user_id = Uuid::new_v4();
    let token = tokens.issue(user_id, "user@example.com").unwrap();
    let headers = headers_with(&format!("Bearer {}", token));

    let claims = AuthGuard::new(&tokens, &headers).require().unwrap();

    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.email, "user@example.com");
}

/// Tests the bearer scheme is matched case-insensitively.
///
/// Expected: Ok(Claims)
#[test]
fn accepts_lowercase_scheme() {
    let tokens = TokenService::new("secret", Duration::hours(1));
    let token = tokens.issue(Uuid::new_v4(), "user@example.com").unwrap();
    let headers = headers_with(&format!("bearer {}", token));

    assert!(AuthGuard::new(&tokens, &headers).require().is_ok());
}

/// Tests a request without an `Authorization` header.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_missing_header() {
    let tokens = TokenService::new("secret", Duration::hours(1));
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&tokens, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests a request using a non-bearer authorization scheme.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_basic_scheme() {
    let tokens = TokenService::new("secret", Duration::hours(1));
    let headers = headers_with("Basic dXNlcjpwYXNz");

    let result = AuthGuard::new(&tokens, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests a request whose token was signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_foreign_token() {
    let issuer = TokenService::new("other-secret", Duration::hours(1));
    let tokens = TokenService::new("secret", Duration::hours(1));
    let token = issuer.issue(Uuid::new_v4(), "user@example.com").unwrap();
    let headers = headers_with(&format!("Bearer {}", token));

    let result = AuthGuard::new(&tokens, &headers).require();

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}
