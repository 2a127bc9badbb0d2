//! Data transfer objects exchanged with API clients.
//!
//! Request DTOs reject unknown fields and carry `validator` rules that the
//! `ValidatedJson` extractor enforces before a handler runs. Response DTOs are
//! produced from domain models by `into_dto` conversions in the server layer.

pub mod api;
pub mod auth;
pub mod order;
pub mod product;
pub mod shop;
