use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260105_000003_item_info::ItemInfo;

static FK_ACCESSORY_INFO_ITEM_INFO_ID: &str = "fk_accessory_info_item_info_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccessoryInfo::Table)
                    .if_not_exists()
                    .col(integer(AccessoryInfo::ItemInfoId).primary_key())
                    .col(string_uniq(AccessoryInfo::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ACCESSORY_INFO_ITEM_INFO_ID)
                    .from_tbl(AccessoryInfo::Table)
                    .from_col(AccessoryInfo::ItemInfoId)
                    .to_tbl(ItemInfo::Table)
                    .to_col(ItemInfo::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ACCESSORY_INFO_ITEM_INFO_ID)
                    .table(AccessoryInfo::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AccessoryInfo::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AccessoryInfo {
    Table,
    ItemInfoId,
    Name,
}
