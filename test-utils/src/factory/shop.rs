//! Shop factory for creating test shop entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test shops with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::shop::ShopFactory;
///
/// let shop = ShopFactory::new(&db, user.id)
///     .name("Corner Bakery")
///     .subdomain("bakery")
///     .build()
///     .await?;
/// ```
pub struct ShopFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::shop::Model,
}

impl<'a> ShopFactory<'a> {
    /// Creates a new ShopFactory owned by `user_id`.
    ///
    /// Defaults:
    /// - name: `"Shop {id}"`
    /// - subdomain: `"shop-{id}"`
    /// - every other optional field: `None`
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            entity: entity::shop::Model {
                id: 0,
                user_id,
                name: format!("Shop {}", id),
                logo_url: None,
                contact_whatsapp: None,
                description: None,
                subdomain: Some(format!("shop-{}", id)),
                created_at: Utc::now(),
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn subdomain(mut self, subdomain: impl Into<String>) -> Self {
        self.entity.subdomain = Some(subdomain.into());
        self
    }

    /// Leaves the shop without a subdomain.
    pub fn without_subdomain(mut self) -> Self {
        self.entity.subdomain = None;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.entity.description = Some(description.into());
        self
    }

    pub fn contact_whatsapp(mut self, contact: impl Into<String>) -> Self {
        self.entity.contact_whatsapp = Some(contact.into());
        self
    }

    /// Builds and inserts the shop entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::shop::Model)` - Created shop entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::shop::Model, DbErr> {
        entity::shop::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.entity.user_id),
            name: ActiveValue::Set(self.entity.name),
            logo_url: ActiveValue::Set(self.entity.logo_url),
            contact_whatsapp: ActiveValue::Set(self.entity.contact_whatsapp),
            description: ActiveValue::Set(self.entity.description),
            subdomain: ActiveValue::Set(self.entity.subdomain),
            created_at: ActiveValue::Set(self.entity.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a shop with default values owned by `user_id`.
///
/// Shorthand for `ShopFactory::new(db, user_id).build().await`.
pub async fn create_shop(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::shop::Model, DbErr> {
    ShopFactory::new(db, user_id).build().await
}
