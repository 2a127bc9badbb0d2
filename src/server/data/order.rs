//! Order data repository for database operations.
//!
//! Orders are always returned together with their items, loaded with one extra
//! query per call rather than one per order.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::order::{CreateOrderParams, Order, UpdateOrderParams};

pub struct OrderRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    /// Creates a repository over a connection or an open transaction.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists orders newest first, each with its items, optionally restricted to one shop.
    pub async fn get_all(&self, shop_id: Option<i32>) -> Result<Vec<Order>, DbErr> {
        let mut query = entity::prelude::Order::find();
        if let Some(shop_id) = shop_id {
            query = query.filter(entity::order::Column::ShopId.eq(shop_id));
        }

        let orders = query
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.is_in(order_ids))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        let mut items_by_order: HashMap<i32, Vec<entity::order_item::Model>> = HashMap::new();
        for item in items {
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let items = items_by_order.remove(&order.id).unwrap_or_default();
                Order::from_entity(order, items)
            })
            .collect())
    }

    /// Gets an order by id with its items.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let Some(order) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let items = self.find_items(id).await?;

        Ok(Some(Order::from_entity(order, items)))
    }

    /// Checks whether an order exists without loading its items.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Order::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }

    /// Inserts a new order; it starts without items.
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, DbErr> {
        let entity = entity::order::ActiveModel {
            shop_id: ActiveValue::Set(params.shop_id),
            customer_name: ActiveValue::Set(params.customer_name),
            customer_phone: ActiveValue::Set(params.customer_phone),
            customer_address: ActiveValue::Set(params.customer_address),
            status: ActiveValue::Set(params.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Order::from_entity(entity, Vec::new()))
    }

    /// Applies a partial update to an order.
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - The updated order with its items
    /// - `Ok(None)` - No order with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: UpdateOrderParams) -> Result<Option<Order>, DbErr> {
        let Some(existing) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.clone().into_active_model();
        if let Some(shop_id) = params.shop_id {
            active.shop_id = ActiveValue::Set(shop_id);
        }
        if let Some(customer_name) = params.customer_name {
            active.customer_name = ActiveValue::Set(customer_name);
        }
        if let Some(customer_phone) = params.customer_phone {
            active.customer_phone = ActiveValue::Set(customer_phone);
        }
        if let Some(customer_address) = params.customer_address {
            active.customer_address = ActiveValue::Set(customer_address);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
        }

        let entity = if active.is_changed() {
            active.update(self.db).await?
        } else {
            existing
        };
        let items = self.find_items(id).await?;

        Ok(Some(Order::from_entity(entity, items)))
    }

    /// Deletes an order; its items cascade.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 when the order did not exist)
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Order::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Deletes every order of a shop; their items cascade.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of orders deleted
    pub async fn delete_by_shop(&self, shop_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Order::delete_many()
            .filter(entity::order::Column::ShopId.eq(shop_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn find_items(&self, order_id: i32) -> Result<Vec<entity::order_item::Model>, DbErr> {
        entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(order_id))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await
    }
}
