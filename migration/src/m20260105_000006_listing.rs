use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Listing::Table)
                    .if_not_exists()
                    .col(pk_auto(Listing::Id))
                    .col(string(Listing::Title))
                    .col(integer(Listing::SellerId))
                    .col(string_len(Listing::Status, 16).default("ON_SALE"))
                    .col(timestamp(Listing::CreatedAt))
                    .col(timestamp(Listing::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Listing::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Listing {
    Table,
    Id,
    Title,
    SellerId,
    Status,
    CreatedAt,
    UpdatedAt,
}
