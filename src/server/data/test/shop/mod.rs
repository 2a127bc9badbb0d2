use crate::server::{
    data::shop::ShopRepository,
    model::shop::{CreateShopParams, UpdateShopParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all;
mod subdomain_in_use;
mod update;
