use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateShopDto {
    /// Owner of the shop.
    pub user_id: Uuid,
    #[schema(example = "Corner Bakery")]
    #[validate(length(
        min = 1,
        max = 255,
        message = "name must be between 1 and 255 characters"
    ))]
    pub name: String,
    #[validate(length(max = 500, message = "logoUrl must be shorter than or equal to 500 characters"))]
    pub logo_url: Option<String>,
    #[schema(example = "6281234567890")]
    #[validate(length(
        max = 20,
        message = "contactWhatsapp must be shorter than or equal to 20 characters"
    ))]
    pub contact_whatsapp: Option<String>,
    pub description: Option<String>,
    #[schema(example = "bakery")]
    #[validate(length(
        min = 1,
        max = 255,
        message = "subdomain must be between 1 and 255 characters"
    ))]
    pub subdomain: Option<String>,
}

/// Partial shop update; absent fields are left untouched.
#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateShopDto {
    pub user_id: Option<Uuid>,
    #[validate(length(
        min = 1,
        max = 255,
        message = "name must be between 1 and 255 characters"
    ))]
    pub name: Option<String>,
    #[validate(length(max = 500, message = "logoUrl must be shorter than or equal to 500 characters"))]
    pub logo_url: Option<String>,
    #[validate(length(
        max = 20,
        message = "contactWhatsapp must be shorter than or equal to 20 characters"
    ))]
    pub contact_whatsapp: Option<String>,
    pub description: Option<String>,
    #[validate(length(
        min = 1,
        max = 255,
        message = "subdomain must be between 1 and 255 characters"
    ))]
    pub subdomain: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShopDto {
    pub id: i32,
    pub user_id: Uuid,
    pub name: String,
    pub logo_url: Option<String>,
    pub contact_whatsapp: Option<String>,
    pub description: Option<String>,
    pub subdomain: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ShopFilterQuery {
    /// Only return shops owned by this user.
    pub user_id: Option<Uuid>,
}
