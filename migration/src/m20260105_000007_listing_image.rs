use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260105_000006_listing::Listing;

static IDX_LISTING_IMAGE_LISTING_ID: &str = "idx_listing_image_listing_id";
static FK_LISTING_IMAGE_LISTING_ID: &str = "fk_listing_image_listing_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ListingImage::Table)
                    .if_not_exists()
                    .col(pk_auto(ListingImage::Id))
                    .col(integer_null(ListingImage::ListingId))
                    .col(string(ListingImage::Url))
                    .col(integer_null(ListingImage::Order))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LISTING_IMAGE_LISTING_ID)
                    .table(ListingImage::Table)
                    .col(ListingImage::ListingId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LISTING_IMAGE_LISTING_ID)
                    .from_tbl(ListingImage::Table)
                    .from_col(ListingImage::ListingId)
                    .to_tbl(Listing::Table)
                    .to_col(Listing::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LISTING_IMAGE_LISTING_ID)
                    .table(ListingImage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LISTING_IMAGE_LISTING_ID)
                    .table(ListingImage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ListingImage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ListingImage {
    Table,
    Id,
    ListingId,
    Url,
    Order,
}
