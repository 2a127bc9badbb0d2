use sea_orm_migration::{prelude::*, schema::*};

use super::m20250623_000002_create_shop_table::Shop;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(integer(Product::ShopId))
                    .col(string_len(Product::Name, 255))
                    .col(text_null(Product::Description))
                    .col(decimal_len(Product::Price, 10, 2))
                    .col(integer(Product::Stock))
                    .col(string_len_null(Product::ImageUrl, 500))
                    .col(boolean(Product::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Product::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_shop_id")
                            .from(Product::Table, Product::ShopId)
                            .to(Shop::Table, Shop::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_shop_id")
                    .table(Product::Table)
                    .col(Product::ShopId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Product {
    #[sea_orm(iden = "products")]
    Table,
    Id,
    ShopId,
    Name,
    Description,
    Price,
    Stock,
    ImageUrl,
    IsActive,
    CreatedAt,
}
