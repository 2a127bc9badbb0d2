//! Shop data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::shop::{CreateShopParams, Shop, UpdateShopParams};

pub struct ShopRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShopRepository<'a, C> {
    /// Creates a repository over a connection or an open transaction.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists shops ordered by id, optionally restricted to one owner.
    pub async fn get_all(&self, user_id: Option<Uuid>) -> Result<Vec<Shop>, DbErr> {
        let mut query = entity::prelude::Shop::find();
        if let Some(user_id) = user_id {
            query = query.filter(entity::shop::Column::UserId.eq(user_id));
        }

        let entities = query
            .order_by_asc(entity::shop::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Shop::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Shop>, DbErr> {
        let entity = entity::prelude::Shop::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Shop::from_entity))
    }

    /// Checks whether any shop other than `exclude_id` already uses `subdomain`.
    ///
    /// # Arguments
    /// - `subdomain` - Subdomain to look up
    /// - `exclude_id` - Shop to ignore, used when a shop keeps its own subdomain
    ///
    /// # Returns
    /// - `Ok(true)` - Subdomain is taken
    /// - `Ok(false)` - Subdomain is free
    /// - `Err(DbErr)` - Database error during query
    pub async fn subdomain_in_use(
        &self,
        subdomain: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Shop::find().filter(entity::shop::Column::Subdomain.eq(subdomain));
        if let Some(id) = exclude_id {
            query = query.filter(entity::shop::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Inserts a new shop.
    ///
    /// # Returns
    /// - `Ok(Shop)` - The created shop
    /// - `Err(DbErr)` - Database error, including unique violations on `subdomain`
    ///   and foreign key violations on `user_id`
    pub async fn create(&self, params: CreateShopParams) -> Result<Shop, DbErr> {
        let entity = entity::shop::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            name: ActiveValue::Set(params.name),
            logo_url: ActiveValue::Set(params.logo_url),
            contact_whatsapp: ActiveValue::Set(params.contact_whatsapp),
            description: ActiveValue::Set(params.description),
            subdomain: ActiveValue::Set(params.subdomain),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Shop::from_entity(entity))
    }

    /// Applies a partial update to a shop.
    ///
    /// # Returns
    /// - `Ok(Some(Shop))` - The updated shop
    /// - `Ok(None)` - No shop with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: UpdateShopParams) -> Result<Option<Shop>, DbErr> {
        let Some(existing) = entity::prelude::Shop::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.clone().into_active_model();
        if let Some(user_id) = params.user_id {
            active.user_id = ActiveValue::Set(user_id);
        }
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(logo_url) = params.logo_url {
            active.logo_url = ActiveValue::Set(Some(logo_url));
        }
        if let Some(contact_whatsapp) = params.contact_whatsapp {
            active.contact_whatsapp = ActiveValue::Set(Some(contact_whatsapp));
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(subdomain) = params.subdomain {
            active.subdomain = ActiveValue::Set(Some(subdomain));
        }

        if !active.is_changed() {
            return Ok(Some(Shop::from_entity(existing)));
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Shop::from_entity(entity)))
    }

    /// Deletes a shop; its products and any remaining orders cascade.
    ///
    /// Orders with items must be removed first (see `OrderRepository::delete_by_shop`):
    /// otherwise the product cascade can hit the `RESTRICT` key on `order_items`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when the shop did not exist)
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Shop::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
