//! Order and order item domain models and parameters.
//!
//! An order is a customer's purchase at one shop. It owns its items; each item
//! reserves stock of one product and records the unit price charged at the time
//! it was added.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::{
    model::order::{
        CreateOrderDto, CreateOrderItemDto, OrderDto, OrderItemDto, UpdateOrderDto,
        UpdateOrderItemDto,
    },
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub shop_id: i32,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    /// Free-form status such as `pending` or `completed`.
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Converts an order entity and its item entities at the repository boundary.
    pub fn from_entity(
        entity: entity::order::Model,
        items: Vec<entity::order_item::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            shop_id: entity.shop_id,
            customer_name: entity.customer_name,
            customer_phone: entity.customer_phone,
            customer_address: entity.customer_address,
            status: entity.status,
            created_at: entity.created_at,
            items: items.into_iter().map(OrderItem::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            shop_id: self.shop_id,
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
            customer_address: self.customer_address,
            status: self.status,
            created_at: self.created_at,
            items: self.items.into_iter().map(OrderItem::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    /// Unit price captured when the item was added.
    pub price: Decimal,
}

impl OrderItem {
    pub fn from_entity(entity: entity::order_item::Model) -> Self {
        Self {
            id: entity.id,
            order_id: entity.order_id,
            product_id: entity.product_id,
            quantity: entity.quantity,
            price: entity.price,
        }
    }

    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            id: self.id,
            order_id: self.order_id,
            product_id: self.product_id,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub shop_id: i32,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub status: String,
}

impl CreateOrderParams {
    pub fn from_dto(dto: CreateOrderDto) -> Self {
        Self {
            shop_id: dto.shop_id,
            customer_name: dto.customer_name,
            customer_phone: dto.customer_phone,
            customer_address: dto.customer_address,
            status: dto.status,
        }
    }
}

/// Partial order update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateOrderParams {
    pub shop_id: Option<i32>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub status: Option<String>,
}

impl UpdateOrderParams {
    pub fn from_dto(dto: UpdateOrderDto) -> Self {
        Self {
            shop_id: dto.shop_id,
            customer_name: dto.customer_name,
            customer_phone: dto.customer_phone,
            customer_address: dto.customer_address,
            status: dto.status,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateOrderItemParams {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: Decimal,
}

impl CreateOrderItemParams {
    /// Converts the request DTO for the order addressed by the path.
    ///
    /// # Returns
    /// - `Ok(CreateOrderItemParams)` - Body carries no order id or the same one as the path
    /// - `Err(AppError::BadRequest)` - Body names a different order than the path
    pub fn from_dto(order_id: i32, dto: CreateOrderItemDto) -> Result<Self, AppError> {
        if let Some(body_order_id) = dto.order_id {
            if body_order_id != order_id {
                return Err(AppError::BadRequest(format!(
                    "orderId {} in body does not match order ID {} in path",
                    body_order_id, order_id
                )));
            }
        }

        Ok(Self {
            order_id,
            product_id: dto.product_id,
            quantity: dto.quantity,
            price: dto.price,
        })
    }
}

/// Partial order item update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateOrderItemParams {
    pub product_id: Option<i32>,
    pub quantity: Option<i32>,
    pub price: Option<Decimal>,
}

impl UpdateOrderItemParams {
    pub fn from_dto(dto: UpdateOrderItemDto) -> Self {
        Self {
            product_id: dto.product_id,
            quantity: dto.quantity,
            price: dto.price,
        }
    }
}
