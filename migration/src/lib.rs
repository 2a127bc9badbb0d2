pub use sea_orm_migration::prelude::*;

mod m20250623_000001_create_user_table;
mod m20250623_000002_create_shop_table;
mod m20250623_000003_create_product_table;
mod m20250623_000004_create_order_table;
mod m20250623_000005_create_order_item_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250623_000001_create_user_table::Migration),
            Box::new(m20250623_000002_create_shop_table::Migration),
            Box::new(m20250623_000003_create_product_table::Migration),
            Box::new(m20250623_000004_create_order_table::Migration),
            Box::new(m20250623_000005_create_order_item_table::Migration),
        ]
    }
}
