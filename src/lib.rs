//! storehub: a small multi-service e-commerce backend.
//!
//! The crate ships four binaries (`auth-api`, `shop-api`, `product-api` and `order-api`)
//! that share this library. Each binary mounts the routes of one service on top of the
//! same layered server (see [`server`]) and the same PostgreSQL schema; services only
//! ever talk to each other through shared tables.
//!
//! - [`model`] - JSON DTOs exchanged over HTTP
//! - [`server`] - configuration, controllers, services, repositories and startup

pub mod model;
pub mod server;
