use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    service::token::TokenService,
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;
use uuid::Uuid;

mod require;

/// Builds a header map carrying the given `Authorization` value.
fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}
