use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260105_000003_item_info::ItemInfo, m20260105_000006_listing::Listing,
    m20260105_000007_listing_image::ListingImage,
};

static IDX_LISTING_ITEM_LISTING_ID: &str = "idx_listing_item_listing_id";
static IDX_LISTING_ITEM_INFO_ID: &str = "idx_listing_item_info_id";
static FK_LISTING_ITEM_LISTING_ID: &str = "fk_listing_item_listing_id";
static FK_LISTING_ITEM_INFO_ID: &str = "fk_listing_item_info_id";
static FK_LISTING_ITEM_LISTING_IMAGE_ID: &str = "fk_listing_item_listing_image_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ListingItem::Table)
                    .if_not_exists()
                    .col(pk_auto(ListingItem::Id))
                    .col(integer(ListingItem::ListingId))
                    .col(integer(ListingItem::InfoId))
                    .col(integer_null(ListingItem::ListingImageId))
                    .col(string_null(ListingItem::Detail))
                    .col(string_null(ListingItem::Condition))
                    .col(integer(ListingItem::Quantity))
                    .col(integer(ListingItem::PricePerUnit))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LISTING_ITEM_LISTING_ID)
                    .table(ListingItem::Table)
                    .col(ListingItem::ListingId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LISTING_ITEM_INFO_ID)
                    .table(ListingItem::Table)
                    .col(ListingItem::InfoId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LISTING_ITEM_LISTING_ID)
                    .from_tbl(ListingItem::Table)
                    .from_col(ListingItem::ListingId)
                    .to_tbl(Listing::Table)
                    .to_col(Listing::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LISTING_ITEM_INFO_ID)
                    .from_tbl(ListingItem::Table)
                    .from_col(ListingItem::InfoId)
                    .to_tbl(ItemInfo::Table)
                    .to_col(ItemInfo::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LISTING_ITEM_LISTING_IMAGE_ID)
                    .from_tbl(ListingItem::Table)
                    .from_col(ListingItem::ListingImageId)
                    .to_tbl(ListingImage::Table)
                    .to_col(ListingImage::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LISTING_ITEM_LISTING_IMAGE_ID)
                    .table(ListingItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LISTING_ITEM_INFO_ID)
                    .table(ListingItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LISTING_ITEM_LISTING_ID)
                    .table(ListingItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LISTING_ITEM_INFO_ID)
                    .table(ListingItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LISTING_ITEM_LISTING_ID)
                    .table(ListingItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ListingItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ListingItem {
    Table,
    Id,
    ListingId,
    InfoId,
    ListingImageId,
    Detail,
    Condition,
    Quantity,
    PricePerUnit,
}
