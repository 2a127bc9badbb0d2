use crate::server::{
    data::order_item::OrderItemRepository,
    model::order::{CreateOrderItemParams, UpdateOrderItemParams},
};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_in_order;
mod update;
