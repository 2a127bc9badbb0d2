//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique value generation and convenience methods for creating
//! entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a shop together with its owning user.
///
/// # Returns
/// - `Ok((user, shop))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_shop_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::shop::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let shop = crate::factory::shop::create_shop(db, user.id).await?;

    Ok((user, shop))
}

/// Creates a product with all dependencies.
///
/// This convenience method creates:
/// 1. User (shop owner)
/// 2. Shop
/// 3. Product
///
/// # Returns
/// - `Ok((user, shop, product))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_product_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::shop::Model,
        entity::product::Model,
    ),
    DbErr,
> {
    let (user, shop) = create_shop_with_owner(db).await?;
    let product = crate::factory::product::create_product(db, shop.id).await?;

    Ok((user, shop, product))
}

/// Creates an order and a product of the same shop, ready for order items.
///
/// # Returns
/// - `Ok((shop, product, order))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_product(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::shop::Model,
        entity::product::Model,
        entity::order::Model,
    ),
    DbErr,
> {
    let (_user, shop, product) = create_product_with_dependencies(db).await?;
    let order = crate::factory::order::create_order(db, shop.id).await?;

    Ok((shop, product, order))
}
