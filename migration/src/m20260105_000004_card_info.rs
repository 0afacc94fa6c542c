use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260105_000001_card_name::CardName, m20260105_000002_card_candidate::CardCandidate,
    m20260105_000003_item_info::ItemInfo,
};

static IDX_CARD_INFO_CANDIDATE_RARITY: &str = "idx_card_info_candidate_id_rarity";
static IDX_CARD_INFO_CARD_NAME_RARITY: &str = "idx_card_info_card_name_id_rarity";
static FK_CARD_INFO_ITEM_INFO_ID: &str = "fk_card_info_item_info_id";
static FK_CARD_INFO_CARD_NAME_ID: &str = "fk_card_info_card_name_id";
static FK_CARD_INFO_CANDIDATE_ID: &str = "fk_card_info_candidate_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CardInfo::Table)
                    .if_not_exists()
                    .col(integer(CardInfo::ItemInfoId).primary_key())
                    .col(string_null(CardInfo::CardCode).unique_key())
                    .col(integer_null(CardInfo::CardNameId))
                    .col(integer_null(CardInfo::CandidateId))
                    .col(string_len(CardInfo::Nation, 8))
                    .col(string_len(CardInfo::Rarity, 8))
                    .to_owned(),
            )
            .await?;

        // Alternate natural keys; each backs the resolver's lookup-or-create
        // race detection for cards without a card code.
        manager
            .create_index(
                Index::create()
                    .name(IDX_CARD_INFO_CANDIDATE_RARITY)
                    .table(CardInfo::Table)
                    .col(CardInfo::CandidateId)
                    .col(CardInfo::Rarity)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CARD_INFO_CARD_NAME_RARITY)
                    .table(CardInfo::Table)
                    .col(CardInfo::CardNameId)
                    .col(CardInfo::Rarity)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CARD_INFO_ITEM_INFO_ID)
                    .from_tbl(CardInfo::Table)
                    .from_col(CardInfo::ItemInfoId)
                    .to_tbl(ItemInfo::Table)
                    .to_col(ItemInfo::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CARD_INFO_CARD_NAME_ID)
                    .from_tbl(CardInfo::Table)
                    .from_col(CardInfo::CardNameId)
                    .to_tbl(CardName::Table)
                    .to_col(CardName::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CARD_INFO_CANDIDATE_ID)
                    .from_tbl(CardInfo::Table)
                    .from_col(CardInfo::CandidateId)
                    .to_tbl(CardCandidate::Table)
                    .to_col(CardCandidate::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CARD_INFO_CANDIDATE_ID)
                    .table(CardInfo::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CARD_INFO_CARD_NAME_ID)
                    .table(CardInfo::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CARD_INFO_ITEM_INFO_ID)
                    .table(CardInfo::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CARD_INFO_CARD_NAME_RARITY)
                    .table(CardInfo::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CARD_INFO_CANDIDATE_RARITY)
                    .table(CardInfo::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CardInfo::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CardInfo {
    Table,
    ItemInfoId,
    CardCode,
    CardNameId,
    CandidateId,
    Nation,
    Rarity,
}
