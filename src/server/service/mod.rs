//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: uniqueness checks, stock bookkeeping, password verification
//! - **Orchestration**: Coordinating multiple repository calls, inside one transaction
//!   where stock moves
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Error Mapping**: Turning missing rows and constraint violations into `AppError`s

pub mod auth;
pub mod order;
pub mod product;
pub mod shop;
pub mod token;

use sea_orm::{DbErr, SqlErr};

use crate::server::error::AppError;

/// Maps a constraint violation raised by the database to a client error.
///
/// Used as the backstop for checks the services already perform up front, so
/// a concurrent request that slips past the check still gets the same answer.
pub(crate) fn map_constraint_violation(err: DbErr, message: impl FnOnce() -> String) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_))
        | Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::BadRequest(message()),
        _ => AppError::DbErr(err),
    }
}
