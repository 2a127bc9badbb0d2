use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, LoginResponseDto, RegisterDto, UserDto},
    },
    server::{
        controller::extract::ValidatedJson, error::AppError, middleware::auth::AuthGuard,
        service::auth::AuthService, state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(register))
        .routes(routes!(login))
        .routes(routes!(get_users))
}

/// Register a new user account.
///
/// The password is stored as a bcrypt hash and never returned.
///
/// # Returns
/// - `201 Created` - The new user
/// - `400 Bad Request` - Invalid body or email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Invalid body or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens, state.bcrypt_cost);

    let user = service
        .register(payload.email, payload.name, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - The user together with a signed access token
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens, state.bcrypt_cost);

    let authenticated = service.login(&payload.email, payload.password).await?;

    let response = LoginResponseDto {
        user: authenticated
            .user
            .into_login_dto(authenticated.access_token),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// List all registered users, newest first.
#[utoipa::path(
    get,
    path = "/auth/users",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require()?;

    let service = AuthService::new(&state.db, &state.tokens, state.bcrypt_cost);

    let users = service.get_users().await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}
