use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{order::OrderRepository, shop::ShopRepository, user::UserRepository},
    error::AppError,
    model::shop::{CreateShopParams, Shop, UpdateShopParams},
};

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Shop with ID {} not found", id))
}

fn user_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("User with ID {} not found", id))
}

fn subdomain_taken(subdomain: &str) -> String {
    format!("Subdomain '{}' is already in use.", subdomain)
}

/// Maps constraint violations raised by a shop insert or update.
///
/// Unique violations can only come from `subdomain`; foreign key violations only from
/// `user_id`, when the owner disappears between the check and the write.
fn map_write_error(err: DbErr, user_id: Option<Uuid>, subdomain: Option<&str>) -> AppError {
    match (err.sql_err(), user_id, subdomain) {
        (Some(SqlErr::UniqueConstraintViolation(_)), _, Some(subdomain)) => {
            AppError::BadRequest(subdomain_taken(subdomain))
        }
        (Some(SqlErr::ForeignKeyConstraintViolation(_)), Some(user_id), _) => {
            user_not_found(user_id)
        }
        _ => AppError::DbErr(err),
    }
}

pub struct ShopService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShopService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists shops, optionally only those owned by `user_id`.
    pub async fn get_all(&self, user_id: Option<Uuid>) -> Result<Vec<Shop>, AppError> {
        Ok(ShopRepository::new(self.db).get_all(user_id).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Shop, AppError> {
        ShopRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates a shop after checking the owner exists and the subdomain is free.
    ///
    /// # Returns
    /// - `Ok(Shop)` - The created shop
    /// - `Err(AppError::NotFound)` - Owner does not exist
    /// - `Err(AppError::BadRequest)` - Subdomain already in use
    pub async fn create(&self, params: CreateShopParams) -> Result<Shop, AppError> {
        let repo = ShopRepository::new(self.db);

        if UserRepository::new(self.db)
            .find_by_id(params.user_id)
            .await?
            .is_none()
        {
            return Err(user_not_found(params.user_id));
        }

        let subdomain = params.subdomain.clone();
        if let Some(subdomain) = &subdomain {
            if repo.subdomain_in_use(subdomain, None).await? {
                return Err(AppError::BadRequest(subdomain_taken(subdomain)));
            }
        }

        let user_id = params.user_id;
        let shop = repo
            .create(params)
            .await
            .map_err(|e| map_write_error(e, Some(user_id), subdomain.as_deref()))?;

        tracing::info!(shop_id = shop.id, "Created shop");

        Ok(shop)
    }

    /// Applies a partial update.
    ///
    /// The subdomain check only runs when the subdomain actually changes.
    ///
    /// # Returns
    /// - `Ok(Shop)` - The updated shop
    /// - `Err(AppError::NotFound)` - Shop (or new owner) does not exist
    /// - `Err(AppError::BadRequest)` - New subdomain already in use
    pub async fn update(&self, id: i32, params: UpdateShopParams) -> Result<Shop, AppError> {
        let repo = ShopRepository::new(self.db);

        let existing = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        if let Some(user_id) = params.user_id {
            if UserRepository::new(self.db).find_by_id(user_id).await?.is_none() {
                return Err(user_not_found(user_id));
            }
        }

        let subdomain = params.subdomain.clone();
        if let Some(subdomain) = &subdomain {
            if existing.subdomain.as_deref() != Some(subdomain.as_str())
                && repo.subdomain_in_use(subdomain, Some(id)).await?
            {
                return Err(AppError::BadRequest(subdomain_taken(subdomain)));
            }
        }

        let user_id = params.user_id;
        repo.update(id, params)
            .await
            .map_err(|e| map_write_error(e, user_id, subdomain.as_deref()))?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a shop together with its products and orders.
    ///
    /// Orders go first, in the same transaction, so their items are gone before the
    /// product cascade checks the `order_items` foreign key.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let shops = ShopRepository::new(&txn);
        if shops.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        OrderRepository::new(&txn).delete_by_shop(id).await?;

        if shops.delete(id).await? == 0 {
            return Err(not_found(id));
        }

        txn.commit().await?;

        tracing::info!(shop_id = id, "Deleted shop");

        Ok(())
    }
}
