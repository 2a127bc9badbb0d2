//! Order item factory for creating test order item entities.
//!
//! Items are inserted directly and do not touch product stock; tests that need
//! stock bookkeeping go through the order service instead.

use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test order items with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order_item::OrderItemFactory;
///
/// let item = OrderItemFactory::new(&db, order.id, product.id)
///     .quantity(3)
///     .build()
///     .await?;
/// ```
pub struct OrderItemFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::order_item::Model,
}

impl<'a> OrderItemFactory<'a> {
    /// Creates a new OrderItemFactory linking `order_id` and `product_id`.
    ///
    /// Defaults:
    /// - quantity: `1`
    /// - price: `10`
    pub fn new(db: &'a DatabaseConnection, order_id: i32, product_id: i32) -> Self {
        Self {
            db,
            entity: entity::order_item::Model {
                id: 0,
                order_id,
                product_id,
                quantity: 1,
                price: Decimal::from(10),
            },
        }
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.entity.quantity = quantity;
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.entity.price = price;
        self
    }

    /// Builds and inserts the order item entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::order_item::Model)` - Created order item entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order_item::Model, DbErr> {
        entity::order_item::ActiveModel {
            id: ActiveValue::NotSet,
            order_id: ActiveValue::Set(self.entity.order_id),
            product_id: ActiveValue::Set(self.entity.product_id),
            quantity: ActiveValue::Set(self.entity.quantity),
            price: ActiveValue::Set(self.entity.price),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order item with default values.
///
/// Shorthand for `OrderItemFactory::new(db, order_id, product_id).build().await`.
pub async fn create_order_item(
    db: &DatabaseConnection,
    order_id: i32,
    product_id: i32,
) -> Result<entity::order_item::Model, DbErr> {
    OrderItemFactory::new(db, order_id, product_id).build().await
}
