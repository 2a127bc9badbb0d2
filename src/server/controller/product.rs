use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        product::{CreateProductDto, ProductDto, ProductFilterQuery, UpdateProductDto},
    },
    server::{
        controller::extract::{PathParams, QueryParams, ValidatedJson},
        error::AppError,
        middleware::auth::AuthGuard,
        model::product::{CreateProductParams, UpdateProductParams},
        service::product::ProductService,
        state::AppState,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "products";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_products, create_product))
        .routes(routes!(get_product, update_product, delete_product))
}

/// List products, optionally only those of one shop.
#[utoipa::path(
    get,
    path = "/products",
    tag = PRODUCT_TAG,
    params(ProductFilterQuery),
    responses(
        (status = 200, description = "All matching products", body = Vec<ProductDto>),
        (status = 400, description = "Malformed filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<ProductFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let products = ProductService::new(&state.db)
        .get_all(filter.shop_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(products.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "The product", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, AppError> {
    let product = ProductService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Create a product in an existing shop.
///
/// # Returns
/// - `201 Created` - The new product
/// - `400 Bad Request` - Negative price or stock, or otherwise invalid body
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Shop does not exist
#[utoipa::path(
    post,
    path = "/products",
    tag = PRODUCT_TAG,
    security(("bearer" = [])),
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Shop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require()?;

    let params = CreateProductParams::from_dto(payload);

    let product = ProductService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Product or shop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParams(id): PathParams<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require()?;

    let params = UpdateProductParams::from_dto(payload);

    let product = ProductService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Delete a product no order refers to.
///
/// # Returns
/// - `200 OK` - Product deleted
/// - `400 Bad Request` - Order items still reference the product
/// - `404 Not Found` - Product does not exist
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = MessageDto),
        (status = 400, description = "Product is referenced by orders", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require()?;

    ProductService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Product deleted successfully")),
    ))
}
