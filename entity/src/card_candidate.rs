use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User-submitted card name pending curation into card_name.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "card_candidate")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::card_info::Entity")]
    CardInfo,
}

impl Related<super::card_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardInfo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
