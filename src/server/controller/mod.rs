//! HTTP handlers, one module per service.
//!
//! Handlers authenticate where required, convert DTOs into domain parameters, call
//! the matching service and convert the result back into a DTO. Each module exposes
//! `routes()` so a binary mounts only the endpoints it serves.

pub mod auth;
pub mod extract;
pub mod order;
pub mod product;
pub mod shop;

#[cfg(test)]
mod test;
