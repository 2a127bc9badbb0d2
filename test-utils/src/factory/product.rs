//! Product factory for creating test product entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::product::ProductFactory;
///
/// let product = ProductFactory::new(&db, shop.id)
///     .price(Decimal::from(25))
///     .stock(3)
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::product::Model,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory for `shop_id`.
    ///
    /// Defaults:
    /// - name: `"Product {id}"`
    /// - price: `10`
    /// - stock: `100`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection, shop_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            entity: entity::product::Model {
                id: 0,
                shop_id,
                name: format!("Product {}", id),
                description: None,
                price: Decimal::from(10),
                stock: 100,
                image_url: None,
                is_active: true,
                created_at: Utc::now(),
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.entity.price = price;
        self
    }

    pub fn stock(mut self, stock: i32) -> Self {
        self.entity.stock = stock;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.entity.is_active = is_active;
        self
    }

    /// Builds and inserts the product entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::product::Model)` - Created product entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            id: ActiveValue::NotSet,
            shop_id: ActiveValue::Set(self.entity.shop_id),
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
            price: ActiveValue::Set(self.entity.price),
            stock: ActiveValue::Set(self.entity.stock),
            image_url: ActiveValue::Set(self.entity.image_url),
            is_active: ActiveValue::Set(self.entity.is_active),
            created_at: ActiveValue::Set(self.entity.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a product with default values for `shop_id`.
///
/// Shorthand for `ProductFactory::new(db, shop_id).build().await`.
pub async fn create_product(
    db: &DatabaseConnection,
    shop_id: i32,
) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db, shop_id).build().await
}
