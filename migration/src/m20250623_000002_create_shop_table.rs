use sea_orm_migration::{prelude::*, schema::*};

use super::m20250623_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shop::Table)
                    .if_not_exists()
                    .col(pk_auto(Shop::Id))
                    .col(uuid(Shop::UserId))
                    .col(string_len(Shop::Name, 255))
                    .col(string_len_null(Shop::LogoUrl, 500))
                    .col(string_len_null(Shop::ContactWhatsapp, 20))
                    .col(text_null(Shop::Description))
                    // Uniqueness is enforced here as well as in the service so
                    // concurrent creates cannot both claim a subdomain.
                    .col(string_len_null(Shop::Subdomain, 255).unique_key())
                    .col(
                        timestamp_with_time_zone(Shop::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shops_user_id")
                            .from(Shop::Table, Shop::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shop::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Shop {
    #[sea_orm(iden = "shops")]
    Table,
    Id,
    UserId,
    Name,
    LogoUrl,
    ContactWhatsapp,
    Description,
    Subdomain,
    CreatedAt,
}
