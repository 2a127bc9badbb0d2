use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::token::{Claims, TokenService},
};

/// Guards protected routes by requiring a valid bearer token.
///
/// Handlers construct the guard from the request headers and call `require()` before
/// touching any data, mirroring how every mutating endpoint is protected.
pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    /// Returns the token's claims when the request carries a valid bearer token.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Authenticated caller
    /// - `Err(AppError::AuthErr(MissingToken))` - No bearer token in the `Authorization` header
    /// - `Err(AppError::AuthErr(InvalidToken))` - Token failed verification
    pub fn require(&self) -> Result<Claims, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        Ok(self.tokens.verify(token)?)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
