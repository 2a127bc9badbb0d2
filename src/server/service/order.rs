//! Orders and their items.
//!
//! Every item operation that moves stock runs in a single database transaction:
//! the stock movement and the item write either both land or neither does.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        order::OrderRepository, order_item::OrderItemRepository, product::ProductRepository,
        shop::ShopRepository,
    },
    error::AppError,
    model::order::{
        CreateOrderItemParams, CreateOrderParams, Order, OrderItem, UpdateOrderItemParams,
        UpdateOrderParams,
    },
};

fn order_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Order with ID {} not found", id))
}

fn product_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Product with ID {} not found", id))
}

fn item_not_found() -> AppError {
    AppError::NotFound("Order item not found".to_string())
}

fn insufficient_stock(product_id: i32) -> AppError {
    AppError::BadRequest(format!("Insufficient stock for product ID {}", product_id))
}

/// Returns a reservation to stock.
///
/// A product deleted since the reservation is skipped; one whose stock cannot grow
/// any further is a client error and the caller's transaction rolls back.
async fn release_reservation<C: ConnectionTrait>(
    products: &ProductRepository<'_, C>,
    product_id: i32,
    quantity: i32,
) -> Result<(), AppError> {
    if products.release_stock(product_id, quantity).await? {
        return Ok(());
    }

    if products.find_by_id(product_id).await?.is_some() {
        return Err(AppError::BadRequest(format!(
            "Stock for product ID {} cannot exceed {}",
            product_id,
            i32::MAX
        )));
    }

    Ok(())
}

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, shop_id: Option<i32>) -> Result<Vec<Order>, AppError> {
        Ok(OrderRepository::new(self.db).get_all(shop_id).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Order, AppError> {
        OrderRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| order_not_found(id))
    }

    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, AppError> {
        self.ensure_shop_exists(params.shop_id).await?;

        let order = OrderRepository::new(self.db).create(params).await?;

        tracing::info!(order_id = order.id, shop_id = order.shop_id, "Created order");

        Ok(order)
    }

    pub async fn update(&self, id: i32, params: UpdateOrderParams) -> Result<Order, AppError> {
        let repo = OrderRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(order_not_found(id));
        }

        if let Some(shop_id) = params.shop_id {
            self.ensure_shop_exists(shop_id).await?;
        }

        repo.update(id, params)
            .await?
            .ok_or_else(|| order_not_found(id))
    }

    /// Deletes an order and, through the foreign key cascade, its items.
    ///
    /// Stock reserved by the items is not returned.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = OrderRepository::new(self.db).delete(id).await?;

        if deleted == 0 {
            return Err(order_not_found(id));
        }

        tracing::info!(order_id = id, "Deleted order");

        Ok(())
    }

    pub async fn get_items(&self, order_id: i32) -> Result<Vec<OrderItem>, AppError> {
        if !OrderRepository::new(self.db).exists(order_id).await? {
            return Err(order_not_found(order_id));
        }

        Ok(OrderItemRepository::new(self.db)
            .get_by_order(order_id)
            .await?)
    }

    /// Adds an item to an order, taking its quantity out of the product's stock.
    ///
    /// # Returns
    /// - `Ok(OrderItem)` - The created item
    /// - `Err(AppError::NotFound)` - Order or product does not exist
    /// - `Err(AppError::BadRequest)` - Product has fewer units than requested
    pub async fn create_item(&self, params: CreateOrderItemParams) -> Result<OrderItem, AppError> {
        let txn = self.db.begin().await?;

        if !OrderRepository::new(&txn).exists(params.order_id).await? {
            return Err(order_not_found(params.order_id));
        }

        let products = ProductRepository::new(&txn);
        if products.find_by_id(params.product_id).await?.is_none() {
            return Err(product_not_found(params.product_id));
        }

        if !products
            .reserve_stock(params.product_id, params.quantity)
            .await?
        {
            return Err(insufficient_stock(params.product_id));
        }

        let item = OrderItemRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::info!(
            order_id = item.order_id,
            product_id = item.product_id,
            quantity = item.quantity,
            "Added order item"
        );

        Ok(item)
    }

    /// Applies a partial update to an item.
    ///
    /// When the product or the quantity changes, the old reservation is returned to
    /// stock and the new one is taken, so stock always reflects the current items.
    ///
    /// # Returns
    /// - `Ok(OrderItem)` - The updated item
    /// - `Err(AppError::NotFound)` - Order, item or new product does not exist
    /// - `Err(AppError::BadRequest)` - Not enough stock for the new reservation
    pub async fn update_item(
        &self,
        order_id: i32,
        item_id: i32,
        params: UpdateOrderItemParams,
    ) -> Result<OrderItem, AppError> {
        let txn = self.db.begin().await?;

        if !OrderRepository::new(&txn).exists(order_id).await? {
            return Err(order_not_found(order_id));
        }

        let items = OrderItemRepository::new(&txn);
        let existing = items
            .find_in_order(order_id, item_id)
            .await?
            .ok_or_else(item_not_found)?;

        let product_id = params.product_id.unwrap_or(existing.product_id);
        let quantity = params.quantity.unwrap_or(existing.quantity);

        if product_id != existing.product_id || quantity != existing.quantity {
            let products = ProductRepository::new(&txn);

            if product_id != existing.product_id
                && products.find_by_id(product_id).await?.is_none()
            {
                return Err(product_not_found(product_id));
            }

            release_reservation(&products, existing.product_id, existing.quantity).await?;

            if !products.reserve_stock(product_id, quantity).await? {
                return Err(insufficient_stock(product_id));
            }
        }

        let item = items
            .update(order_id, item_id, params)
            .await?
            .ok_or_else(item_not_found)?;

        txn.commit().await?;

        Ok(item)
    }

    /// Removes an item and returns its quantity to the product's stock.
    pub async fn delete_item(&self, order_id: i32, item_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !OrderRepository::new(&txn).exists(order_id).await? {
            return Err(order_not_found(order_id));
        }

        let items = OrderItemRepository::new(&txn);
        let existing = items
            .find_in_order(order_id, item_id)
            .await?
            .ok_or_else(item_not_found)?;

        release_reservation(
            &ProductRepository::new(&txn),
            existing.product_id,
            existing.quantity,
        )
        .await?;

        if items.delete(order_id, item_id).await? == 0 {
            return Err(item_not_found());
        }

        txn.commit().await?;

        tracing::info!(order_id, item_id, "Deleted order item");

        Ok(())
    }

    async fn ensure_shop_exists(&self, shop_id: i32) -> Result<(), AppError> {
        match ShopRepository::new(self.db).find_by_id(shop_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!(
                "Shop with ID {} not found",
                shop_id
            ))),
        }
    }
}
