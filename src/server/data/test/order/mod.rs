use crate::server::{
    data::order::OrderRepository,
    model::order::{CreateOrderParams, UpdateOrderParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod delete_by_shop;
mod find_by_id;
mod get_all;
mod update;
