use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateProductDto {
    pub shop_id: i32,
    #[schema(example = "Sourdough Loaf")]
    #[validate(length(
        min = 1,
        max = 255,
        message = "name must be between 1 and 255 characters"
    ))]
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = f64, example = 4.5)]
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
    #[schema(example = 20)]
    #[validate(range(min = 0, message = "stock must not be less than 0"))]
    pub stock: i32,
    #[validate(length(max = 500, message = "imageUrl must be shorter than or equal to 500 characters"))]
    pub image_url: Option<String>,
    /// Defaults to `true` when omitted.
    pub is_active: Option<bool>,
}

/// Partial product update; absent fields are left untouched.
#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[validate(schema(function = "validate_update_price"))]
pub struct UpdateProductDto {
    pub shop_id: Option<i32>,
    #[validate(length(
        min = 1,
        max = 255,
        message = "name must be between 1 and 255 characters"
    ))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
    #[validate(range(min = 0, message = "stock must not be less than 0"))]
    pub stock: Option<i32>,
    #[validate(length(max = 500, message = "imageUrl must be shorter than or equal to 500 characters"))]
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i32,
    pub shop_id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Serialized as a decimal string, e.g. `"4.50"`.
    #[schema(value_type = String, example = "4.50")]
    pub price: Decimal,
    pub stock: i32,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductFilterQuery {
    /// Only return products of this shop.
    pub shop_id: Option<i32>,
}

/// Exclusive upper bound for prices; `decimal(10,2)` holds at most 99999999.99.
const PRICE_LIMIT: i64 = 100_000_000;

/// Rejects amounts a `decimal(10,2)` column cannot store exactly.
pub(crate) fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    let message = if price.is_sign_negative() && !price.is_zero() {
        "price must not be less than 0"
    } else if *price >= Decimal::from(PRICE_LIMIT) {
        "price must be less than 100000000"
    } else if price.normalize().scale() > 2 {
        "price must have at most 2 decimal places"
    } else {
        return Ok(());
    };

    let mut error = ValidationError::new("price");
    error.message = Some(message.into());
    Err(error)
}

fn validate_update_price(dto: &UpdateProductDto) -> Result<(), ValidationError> {
    match &dto.price {
        Some(price) => validate_price(price),
        None => Ok(()),
    }
}
