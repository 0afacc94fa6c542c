use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accessory_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub item_info_id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::item_info::Entity",
        from = "Column::ItemInfoId",
        to = "super::item_info::Column::Id"
    )]
    ItemInfo,
}

impl Related<super::item_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemInfo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
