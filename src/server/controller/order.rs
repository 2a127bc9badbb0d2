use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        order::{
            CreateOrderDto, CreateOrderItemDto, OrderDto, OrderFilterQuery, OrderItemDto,
            UpdateOrderDto, UpdateOrderItemDto,
        },
    },
    server::{
        controller::extract::{PathParams, QueryParams, ValidatedJson},
        error::AppError,
        middleware::auth::AuthGuard,
        model::order::{
            CreateOrderItemParams, CreateOrderParams, UpdateOrderItemParams, UpdateOrderParams,
        },
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "orders";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_orders, create_order))
        .routes(routes!(get_order, update_order, delete_order))
        .routes(routes!(get_order_items, create_order_item))
        .routes(routes!(update_order_item, delete_order_item))
}

/// List orders newest first, each with its items.
#[utoipa::path(
    get,
    path = "/orders",
    tag = ORDER_TAG,
    params(OrderFilterQuery),
    responses(
        (status = 200, description = "All matching orders", body = Vec<OrderDto>),
        (status = 400, description = "Malformed filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    QueryParams(filter): QueryParams<OrderFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::new(&state.db).get_all(filter.shop_id).await?;

    Ok((
        StatusCode::OK,
        Json(orders.into_iter().map(|o| o.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "The order with its items", body = OrderDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Create an order; items are added separately.
#[utoipa::path(
    post,
    path = "/orders",
    tag = ORDER_TAG,
    security(("bearer" = [])),
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order created", body = OrderDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Shop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require()?;

    let params = CreateOrderParams::from_dto(payload);

    let order = OrderService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderDto,
    responses(
        (status = 200, description = "Order updated", body = OrderDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Order or shop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParams(id): PathParams<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require()?;

    let params = UpdateOrderParams::from_dto(payload);

    let order = OrderService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Delete an order and its items.
///
/// Stock held by the items is not returned to the products.
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParams(id): PathParams<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require()?;

    OrderService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Order deleted successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/orders/{order_id}/items",
    tag = ORDER_TAG,
    params(("order_id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Items of the order", body = Vec<OrderItemDto>),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order_items(
    State(state): State<AppState>,
    PathParams(order_id): PathParams<i32>,
) -> Result<impl IntoResponse, AppError> {
    let items = OrderService::new(&state.db).get_items(order_id).await?;

    Ok((
        StatusCode::OK,
        Json(items.into_iter().map(|i| i.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Add an item to an order.
///
/// The requested quantity is taken out of the product's stock in the same
/// transaction as the insert.
///
/// # Returns
/// - `201 Created` - The new item
/// - `400 Bad Request` - Invalid body, mismatched `orderId` or insufficient stock
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Order or product does not exist
#[utoipa::path(
    post,
    path = "/orders/{order_id}/items",
    tag = ORDER_TAG,
    security(("bearer" = [])),
    params(("order_id" = i32, Path, description = "Order ID")),
    request_body = CreateOrderItemDto,
    responses(
        (status = 201, description = "Item added", body = OrderItemDto),
        (status = 400, description = "Invalid body or insufficient stock", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Order or product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParams(order_id): PathParams<i32>,
    ValidatedJson(payload): ValidatedJson<CreateOrderItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require()?;

    let params = CreateOrderItemParams::from_dto(order_id, payload)?;

    let item = OrderService::new(&state.db).create_item(params).await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// Update an item, re-balancing product stock when the product or quantity changes.
#[utoipa::path(
    patch,
    path = "/orders/{order_id}/items/{item_id}",
    tag = ORDER_TAG,
    security(("bearer" = [])),
    params(
        ("order_id" = i32, Path, description = "Order ID"),
        ("item_id" = i32, Path, description = "Order item ID")
    ),
    request_body = UpdateOrderItemDto,
    responses(
        (status = 200, description = "Item updated", body = OrderItemDto),
        (status = 400, description = "Invalid body or insufficient stock", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Order, item or product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParams((order_id, item_id)): PathParams<(i32, i32)>,
    ValidatedJson(payload): ValidatedJson<UpdateOrderItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require()?;

    let params = UpdateOrderItemParams::from_dto(payload);

    let item = OrderService::new(&state.db)
        .update_item(order_id, item_id, params)
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Remove an item and return its quantity to stock.
#[utoipa::path(
    delete,
    path = "/orders/{order_id}/items/{item_id}",
    tag = ORDER_TAG,
    security(("bearer" = [])),
    params(
        ("order_id" = i32, Path, description = "Order ID"),
        ("item_id" = i32, Path, description = "Order item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Order or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_order_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParams((order_id, item_id)): PathParams<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require()?;

    OrderService::new(&state.db)
        .delete_item(order_id, item_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Order item deleted successfully")),
    ))
}
