use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Officially catalogued card name.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "card_name")]
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
