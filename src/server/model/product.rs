//! Product domain models and parameters.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::model::product::{CreateProductDto, ProductDto, UpdateProductDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub shop_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    /// Units available; never negative.
    pub stock: i32,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            id: entity.id,
            shop_id: entity.shop_id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            stock: entity.stock,
            image_url: entity.image_url,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            shop_id: self.shop_id,
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            image_url: self.image_url,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProductParams {
    pub shop_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub image_url: Option<String>,
    pub is_active: bool,
}

impl CreateProductParams {
    /// Converts the request DTO; products are active unless stated otherwise.
    pub fn from_dto(dto: CreateProductDto) -> Self {
        Self {
            shop_id: dto.shop_id,
            name: dto.name,
            description: dto.description,
            price: dto.price,
            stock: dto.stock,
            image_url: dto.image_url,
            is_active: dto.is_active.unwrap_or(true),
        }
    }
}

/// Partial product update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProductParams {
    pub shop_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateProductParams {
    pub fn from_dto(dto: UpdateProductDto) -> Self {
        Self {
            shop_id: dto.shop_id,
            name: dto.name,
            description: dto.description,
            price: dto.price,
            stock: dto.stock,
            image_url: dto.image_url,
            is_active: dto.is_active,
        }
    }
}
