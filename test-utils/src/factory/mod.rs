//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they depend on, and the
//! `helpers` module builds whole dependency chains in one call.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let shop = factory::shop::create_shop(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (user, shop, product) = factory::helpers::create_product_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let product = factory::product::ProductFactory::new(&db, shop.id)
//!     .name("Premium Chair")
//!     .stock(3)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `shop` - Create shop entities
//! - `product` - Create product entities
//! - `order` - Create order entities
//! - `order_item` - Create order item entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod order;
pub mod order_item;
pub mod product;
pub mod shop;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use order::create_order;
pub use order_item::create_order_item;
pub use product::create_product;
pub use shop::create_shop;
pub use user::create_user;
