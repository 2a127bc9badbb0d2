use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        shop::{CreateShopDto, ShopDto, ShopFilterQuery, UpdateShopDto},
    },
    server::{
        controller::extract::{PathParams, QueryParams, ValidatedJson},
        error::AppError,
        middleware::auth::AuthGuard,
        model::shop::{CreateShopParams, UpdateShopParams},
        service::shop::ShopService,
        state::AppState,
    },
};

/// Tag for grouping shop endpoints in OpenAPI documentation
pub static SHOP_TAG: &str = "shops";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_shops, create_shop))
        .routes(routes!(get_shop, update_shop, delete_shop))
}

/// List shops, optionally only those of one owner.
#[utoipa::path(
    get,
    path = "/shops",
    tag = SHOP_TAG,
    params(ShopFilterQuery),
    responses(
        (status = 200, description = "All matching shops", body = Vec<ShopDto>),
        (status = 400, description = "Malformed filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shops(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<ShopFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let shops = ShopService::new(&state.db).get_all(filter.user_id).await?;

    Ok((
        StatusCode::OK,
        Json(shops.into_iter().map(|s| s.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/shops/{id}",
    tag = SHOP_TAG,
    params(("id" = i32, Path, description = "Shop ID")),
    responses(
        (status = 200, description = "The shop", body = ShopDto),
        (status = 404, description = "Shop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shop(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, AppError> {
    let shop = ShopService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(shop.into_dto())))
}

/// Create a shop.
///
/// # Returns
/// - `201 Created` - The new shop
/// - `400 Bad Request` - Invalid body or subdomain already in use
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Owner does not exist
#[utoipa::path(
    post,
    path = "/shops",
    tag = SHOP_TAG,
    security(("bearer" = [])),
    request_body = CreateShopDto,
    responses(
        (status = 201, description = "Shop created", body = ShopDto),
        (status = 400, description = "Invalid body or subdomain in use", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_shop(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateShopDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require()?;

    let params = CreateShopParams::from_dto(payload);

    let shop = ShopService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(shop.into_dto())))
}

/// Update a shop.
///
/// Only the fields present in the body change.
#[utoipa::path(
    patch,
    path = "/shops/{id}",
    tag = SHOP_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Shop ID")),
    request_body = UpdateShopDto,
    responses(
        (status = 200, description = "Shop updated", body = ShopDto),
        (status = 400, description = "Invalid body or subdomain in use", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Shop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_shop(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParams(id): PathParams<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateShopDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require()?;

    let params = UpdateShopParams::from_dto(payload);

    let shop = ShopService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(shop.into_dto())))
}

/// Delete a shop along with its products and orders.
#[utoipa::path(
    delete,
    path = "/shops/{id}",
    tag = SHOP_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Shop ID")),
    responses(
        (status = 200, description = "Shop deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Shop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_shop(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require()?;

    ShopService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Shop deleted successfully")),
    ))
}
