//! Product data repository for database operations.
//!
//! Besides plain CRUD this repository owns the two stock movements used by orders.
//! Both are single conditional `UPDATE` statements so concurrent requests can never
//! drive stock below zero.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::product::{CreateProductParams, Product, UpdateProductParams};

pub struct ProductRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    /// Creates a repository over a connection or an open transaction.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists products ordered by id, optionally restricted to one shop.
    pub async fn get_all(&self, shop_id: Option<i32>) -> Result<Vec<Product>, DbErr> {
        let mut query = entity::prelude::Product::find();
        if let Some(shop_id) = shop_id {
            query = query.filter(entity::product::Column::ShopId.eq(shop_id));
        }

        let entities = query
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Product::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DbErr> {
        let entity = entity::prelude::Product::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Product::from_entity))
    }

    pub async fn create(&self, params: CreateProductParams) -> Result<Product, DbErr> {
        let entity = entity::product::ActiveModel {
            shop_id: ActiveValue::Set(params.shop_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            stock: ActiveValue::Set(params.stock),
            image_url: ActiveValue::Set(params.image_url),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Product::from_entity(entity))
    }

    /// Applies a partial update to a product.
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - The updated product
    /// - `Ok(None)` - No product with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateProductParams,
    ) -> Result<Option<Product>, DbErr> {
        let Some(existing) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.clone().into_active_model();
        if let Some(shop_id) = params.shop_id {
            active.shop_id = ActiveValue::Set(shop_id);
        }
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(price) = params.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(stock) = params.stock {
            active.stock = ActiveValue::Set(stock);
        }
        if let Some(image_url) = params.image_url {
            active.image_url = ActiveValue::Set(Some(image_url));
        }
        if let Some(is_active) = params.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }

        if !active.is_changed() {
            return Ok(Some(Product::from_entity(existing)));
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Product::from_entity(entity)))
    }

    /// Deletes a product.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when the product did not exist)
    /// - `Err(DbErr)` - Database error, including a foreign key violation when order
    ///   items still reference the product
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Product::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Checks whether any order item references the product.
    pub async fn has_order_items(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::ProductId.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Removes `quantity` units from stock if at least that many are available.
    ///
    /// # Returns
    /// - `Ok(true)` - Stock was decremented
    /// - `Ok(false)` - Product missing or not enough stock; nothing changed
    /// - `Err(DbErr)` - Database error during update
    pub async fn reserve_stock(&self, id: i32, quantity: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Product::update_many()
            .col_expr(
                entity::product::Column::Stock,
                Expr::col(entity::product::Column::Stock).sub(quantity),
            )
            .filter(entity::product::Column::Id.eq(id))
            .filter(entity::product::Column::Stock.gte(quantity))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Returns `quantity` units to stock if the result still fits the column.
    ///
    /// # Returns
    /// - `Ok(true)` - Stock was incremented
    /// - `Ok(false)` - Product no longer exists, or stock would exceed `i32::MAX`; nothing changed
    /// - `Err(DbErr)` - Database error during update
    pub async fn release_stock(&self, id: i32, quantity: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Product::update_many()
            .col_expr(
                entity::product::Column::Stock,
                Expr::col(entity::product::Column::Stock).add(quantity),
            )
            .filter(entity::product::Column::Id.eq(id))
            .filter(entity::product::Column::Stock.lte(i32::MAX.saturating_sub(quantity)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
