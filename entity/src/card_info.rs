use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::{CardNation, Rarity};

/// Card-side details of an item_info entry. The natural identity key is
/// `card_code` when present, otherwise `(candidate_id, rarity)` or
/// `(card_name_id, rarity)`; the composite keys are enforced as unique
/// indexes in the migration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "card_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub item_info_id: i32,
    #[sea_orm(unique)]
    pub card_code: Option<String>,
    pub card_name_id: Option<i32>,
    pub candidate_id: Option<i32>,
    pub nation: CardNation,
    pub rarity: Rarity,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::item_info::Entity",
        from = "Column::ItemInfoId",
        to = "super::item_info::Column::Id"
    )]
    ItemInfo,
    #[sea_orm(
        belongs_to = "super::card_name::Entity",
        from = "Column::CardNameId",
        to = "super::card_name::Column::Id"
    )]
    CardName,
    #[sea_orm(
        belongs_to = "super::card_candidate::Entity",
        from = "Column::CandidateId",
        to = "super::card_candidate::Column::Id"
    )]
    CardCandidate,
}

impl Related<super::item_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemInfo.def()
    }
}

impl Related<super::card_name::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardName.def()
    }
}

impl Related<super::card_candidate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardCandidate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
