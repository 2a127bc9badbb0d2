use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header on a protected route.
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token failed signature, structure or expiry validation.
    ///
    /// # Fields
    /// - Reason reported by the JWT decoder, logged but never returned to the client
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Login attempted with an unknown email or a wrong password.
    ///
    /// Both cases share one variant so responses do not reveal which emails exist.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signing a freshly issued token failed.
    #[error("Failed to sign access token: {0}")]
    TokenCreation(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized with "Unauthorized"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid email or password"
/// - `TokenCreation` → 500 Internal Server Error with generic message
///
/// Token failures are logged at debug level for diagnostics while keeping client-facing
/// messages generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Unauthorized".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::TokenCreation(_) => {
                tracing::error!("{}", self);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
