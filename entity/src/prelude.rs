pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::product::Entity as Product;
pub use super::shop::Entity as Shop;
pub use super::user::Entity as User;
