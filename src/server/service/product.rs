use sea_orm::DatabaseConnection;

use crate::server::{
    data::{product::ProductRepository, shop::ShopRepository},
    error::AppError,
    model::product::{CreateProductParams, Product, UpdateProductParams},
    service::map_constraint_violation,
};

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Product with ID {} not found", id))
}

fn referenced_by_orders(id: i32) -> String {
    format!("Product with ID {} is referenced by existing orders", id)
}

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, shop_id: Option<i32>) -> Result<Vec<Product>, AppError> {
        Ok(ProductRepository::new(self.db).get_all(shop_id).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Product, AppError> {
        ProductRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, params: CreateProductParams) -> Result<Product, AppError> {
        self.ensure_shop_exists(params.shop_id).await?;

        let product = ProductRepository::new(self.db).create(params).await?;

        tracing::info!(product_id = product.id, shop_id = product.shop_id, "Created product");

        Ok(product)
    }

    /// Applies a partial update, checking the new shop when the product moves.
    pub async fn update(&self, id: i32, params: UpdateProductParams) -> Result<Product, AppError> {
        let repo = ProductRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        if let Some(shop_id) = params.shop_id {
            self.ensure_shop_exists(shop_id).await?;
        }

        repo.update(id, params).await?.ok_or_else(|| not_found(id))
    }

    /// Deletes a product that no order item references.
    ///
    /// # Returns
    /// - `Ok(())` - Product deleted
    /// - `Err(AppError::NotFound)` - No product with that id
    /// - `Err(AppError::BadRequest)` - Order items still reference the product
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ProductRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        if repo.has_order_items(id).await? {
            return Err(AppError::BadRequest(referenced_by_orders(id)));
        }

        let deleted = repo
            .delete(id)
            .await
            .map_err(|e| map_constraint_violation(e, || referenced_by_orders(id)))?;

        if deleted == 0 {
            return Err(not_found(id));
        }

        tracing::info!(product_id = id, "Deleted product");

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
