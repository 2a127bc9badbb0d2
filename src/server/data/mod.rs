//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories touched by stock movements (`product`, `order`, `order_item`) are generic
//! over `ConnectionTrait` so the service layer can run them inside one transaction.

pub mod order;
pub mod order_item;
pub mod product;
pub mod shop;
pub mod user;

#[cfg(test)]
mod test;
