//! JWT issuance and verification.
//!
//! Every service shares the same `JWT_SECRET`, so a token issued by `auth-api`
//! is accepted by the protected routes of the other services.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::error::auth::AuthError;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Id of the authenticated user.
    pub sub: Uuid,
    pub email: String,
    /// Issued at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

/// Signs and validates HS256 access tokens.
#[derive(Clone)]
pub struct TokenService {
    keys: Arc<Keys>,
    expires_in: Duration,
}

impl TokenService {
    /// Creates a token service from a shared secret and a token lifetime.
    pub fn new(secret: &str, expires_in: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
                validation,
            }),
            expires_in,
        }
    }

    /// Issues an access token for the given user.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed JWT
    /// - `Err(AuthError::TokenCreation)` - Signing failed or the expiry is not representable
    pub fn issue(&self, user_id: Uuid, email: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.expires_in)
            .ok_or_else(|| AuthError::TokenCreation("token lifetime overflows".to_string()))?;

        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(|e| AuthError::TokenCreation(e.to_string()))
    }

    /// Verifies a token's signature and expiry and returns its claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Token is expired, malformed or signed with another key
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.keys.decoding, &self.keys.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => "token expired".to_string(),
                    ErrorKind::InvalidSignature => "signature mismatch".to_string(),
                    ErrorKind::InvalidToken => "malformed token".to_string(),
                    _ => e.to_string(),
                };
                AuthError::InvalidToken(reason)
            })
    }
}
