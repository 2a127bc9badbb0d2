use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::model::product::validate_price;

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateOrderDto {
    pub shop_id: i32,
    #[schema(example = "John Doe")]
    #[validate(length(
        min = 1,
        max = 255,
        message = "customerName must be between 1 and 255 characters"
    ))]
    pub customer_name: String,
    #[schema(example = "6281234567890")]
    #[validate(length(
        min = 1,
        max = 20,
        message = "customerPhone must be between 1 and 20 characters"
    ))]
    pub customer_phone: String,
    #[schema(example = "Jl. Merdeka No. 123, Jakarta")]
    #[validate(length(min = 1, message = "customerAddress should not be empty"))]
    pub customer_address: String,
    #[schema(example = "pending")]
    #[validate(length(
        min = 1,
        max = 50,
        message = "status must be between 1 and 50 characters"
    ))]
    pub status: String,
}

/// Partial order update; absent fields are left untouched.
#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateOrderDto {
    pub shop_id: Option<i32>,
    #[validate(length(
        min = 1,
        max = 255,
        message = "customerName must be between 1 and 255 characters"
    ))]
    pub customer_name: Option<String>,
    #[validate(length(
        min = 1,
        max = 20,
        message = "customerPhone must be between 1 and 20 characters"
    ))]
    pub customer_phone: Option<String>,
    #[validate(length(min = 1, message = "customerAddress should not be empty"))]
    pub customer_address: Option<String>,
    #[validate(length(
        min = 1,
        max = 50,
        message = "status must be between 1 and 50 characters"
    ))]
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i32,
    pub shop_id: i32,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemDto>,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateOrderItemDto {
    /// Optional; when present it must match the order id in the path.
    pub order_id: Option<i32>,
    #[schema(example = 101)]
    pub product_id: i32,
    #[schema(example = 2)]
    #[validate(range(min = 1, message = "quantity must not be less than 1"))]
    pub quantity: i32,
    /// Unit price captured for this item.
    #[schema(value_type = f64, example = 15000)]
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
}

#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[validate(schema(function = "validate_update_item_price"))]
pub struct UpdateOrderItemDto {
    pub product_id: Option<i32>,
    #[validate(range(min = 1, message = "quantity must not be less than 1"))]
    pub quantity: Option<i32>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    #[schema(value_type = String, example = "15000.00")]
    pub price: Decimal,
}

#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OrderFilterQuery {
    /// Only return orders placed with this shop.
    pub shop_id: Option<i32>,
}

fn validate_update_item_price(dto: &UpdateOrderItemDto) -> Result<(), ValidationError> {
    match &dto.price {
        Some(price) => validate_price(price),
        None => Ok(()),
    }
}
