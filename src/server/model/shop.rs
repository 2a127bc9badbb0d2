//! Shop domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::shop::{CreateShopDto, ShopDto, UpdateShopDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Shop {
    pub id: i32,
    /// Owning user.
    pub user_id: Uuid,
    pub name: String,
    pub logo_url: Option<String>,
    pub contact_whatsapp: Option<String>,
    pub description: Option<String>,
    /// Unique across all shops when set.
    pub subdomain: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Shop {
    pub fn from_entity(entity: entity::shop::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            logo_url: entity.logo_url,
            contact_whatsapp: entity.contact_whatsapp,
            description: entity.description,
            subdomain: entity.subdomain,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ShopDto {
        ShopDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            logo_url: self.logo_url,
            contact_whatsapp: self.contact_whatsapp,
            description: self.description,
            subdomain: self.subdomain,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateShopParams {
    pub user_id: Uuid,
    pub name: String,
    pub logo_url: Option<String>,
    pub contact_whatsapp: Option<String>,
    pub description: Option<String>,
    pub subdomain: Option<String>,
}

impl CreateShopParams {
    pub fn from_dto(dto: CreateShopDto) -> Self {
        Self {
            user_id: dto.user_id,
            name: dto.name,
            logo_url: dto.logo_url,
            contact_whatsapp: dto.contact_whatsapp,
            description: dto.description,
            subdomain: dto.subdomain,
        }
    }
}

/// Partial shop update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateShopParams {
    pub user_id: Option<Uuid>,
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub contact_whatsapp: Option<String>,
    pub description: Option<String>,
    pub subdomain: Option<String>,
}

impl UpdateShopParams {
    pub fn from_dto(dto: UpdateShopDto) -> Self {
        Self {
            user_id: dto.user_id,
            name: dto.name,
            logo_url: dto.logo_url,
            contact_whatsapp: dto.contact_whatsapp,
            description: dto.description,
            subdomain: dto.subdomain,
        }
    }
}
