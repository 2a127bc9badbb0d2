use crate::server::{
    data::product::ProductRepository,
    model::product::{CreateProductParams, UpdateProductParams},
};
use rust_decimal::Decimal;
use sea_orm::{DbErr, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod has_order_items;
mod release_stock;
mod reserve_stock;
mod update;
