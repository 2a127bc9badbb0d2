//! Order item data repository for database operations.
//!
//! Items are always addressed through their order: lookups filter on both ids so an
//! item can never be read or changed via another order's URL. Stock bookkeeping is
//! the caller's job (see `ProductRepository::reserve_stock`).

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::order::{CreateOrderItemParams, OrderItem, UpdateOrderItemParams};

pub struct OrderItemRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderItemRepository<'a, C> {
    /// Creates a repository over a connection or an open transaction.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists the items of an order ordered by id.
    pub async fn get_by_order(&self, order_id: i32) -> Result<Vec<OrderItem>, DbErr> {
        let entities = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(order_id))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(OrderItem::from_entity).collect())
    }

    /// Finds an item by id, only if it belongs to `order_id`.
    pub async fn find_in_order(
        &self,
        order_id: i32,
        item_id: i32,
    ) -> Result<Option<OrderItem>, DbErr> {
        let entity = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::Id.eq(item_id))
            .filter(entity::order_item::Column::OrderId.eq(order_id))
            .one(self.db)
            .await?;

        Ok(entity.map(OrderItem::from_entity))
    }

    pub async fn create(&self, params: CreateOrderItemParams) -> Result<OrderItem, DbErr> {
        let entity = entity::order_item::ActiveModel {
            order_id: ActiveValue::Set(params.order_id),
            product_id: ActiveValue::Set(params.product_id),
            quantity: ActiveValue::Set(params.quantity),
            price: ActiveValue::Set(params.price),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(OrderItem::from_entity(entity))
    }

    /// Applies a partial update to an item of `order_id`.
    ///
    /// # Returns
    /// - `Ok(Some(OrderItem))` - The updated item
    /// - `Ok(None)` - No such item in that order
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        order_id: i32,
        item_id: i32,
        params: UpdateOrderItemParams,
    ) -> Result<Option<OrderItem>, DbErr> {
        let Some(existing) = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::Id.eq(item_id))
            .filter(entity::order_item::Column::OrderId.eq(order_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.clone().into_active_model();
        if let Some(product_id) = params.product_id {
            active.product_id = ActiveValue::Set(product_id);
        }
        if let Some(quantity) = params.quantity {
            active.quantity = ActiveValue::Set(quantity);
        }
        if let Some(price) = params.price {
            active.price = ActiveValue::Set(price);
        }

        if !active.is_changed() {
            return Ok(Some(OrderItem::from_entity(existing)));
        }

        let entity = active.update(self.db).await?;

        Ok(Some(OrderItem::from_entity(entity)))
    }

    /// Deletes an item of `order_id`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when no such item exists in that order)
    pub async fn delete(&self, order_id: i32, item_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::OrderItem::delete_many()
            .filter(entity::order_item::Column::Id.eq(item_id))
            .filter(entity::order_item::Column::OrderId.eq(order_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
