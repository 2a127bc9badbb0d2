//! Order factory for creating test order entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order::OrderFactory;
///
/// let order = OrderFactory::new(&db, shop.id)
///     .status("shipped")
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::order::Model,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory for `shop_id`.
    ///
    /// Defaults:
    /// - customer_name: `"Customer {id}"`
    /// - customer_phone: `"0812000{id}"`
    /// - customer_address: `"{id} Market Street"`
    /// - status: `"pending"`
    pub fn new(db: &'a DatabaseConnection, shop_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            entity: entity::order::Model {
                id: 0,
                shop_id,
                customer_name: format!("Customer {}", id),
                customer_phone: format!("0812000{}", id),
                customer_address: format!("{} Market Street", id),
                status: "pending".to_string(),
                created_at: Utc::now(),
            },
        }
    }

    pub fn customer_name(mut self, name: impl Into<String>) -> Self {
        self.entity.customer_name = name.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.entity.status = status.into();
        self
    }

    /// Overrides the creation timestamp, useful when asserting ordering.
    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.entity.created_at = created_at;
        self
    }

    /// Builds and inserts the order entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::order::Model)` - Created order entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            id: ActiveValue::NotSet,
            shop_id: ActiveValue::Set(self.entity.shop_id),
            customer_name: ActiveValue::Set(self.entity.customer_name),
            customer_phone: ActiveValue::Set(self.entity.customer_phone),
            customer_address: ActiveValue::Set(self.entity.customer_address),
            status: ActiveValue::Set(self.entity.status),
            created_at: ActiveValue::Set(self.entity.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order with default values for `shop_id`.
///
/// Shorthand for `OrderFactory::new(db, shop_id).build().await`.
pub async fn create_order(
    db: &DatabaseConnection,
    shop_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, shop_id).build().await
}
