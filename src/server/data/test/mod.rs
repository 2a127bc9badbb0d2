mod order;
mod order_item;
mod product;
mod shop;
mod user;
