use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::ItemType;

/// Canonical catalog identity for a sellable item. Exactly one of the
/// card_info / accessory_info rows exists per entry, selected by `item_type`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "item_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type")]
    pub item_type: ItemType,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::card_info::Entity")]
    CardInfo,
    #[sea_orm(has_one = "super::accessory_info::Entity")]
    AccessoryInfo,
    #[sea_orm(has_many = "super::listing_item::Entity")]
    ListingItem,
}

impl Related<super::card_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardInfo.def()
    }
}

impl Related<super::accessory_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccessoryInfo.def()
    }
}

impl Related<super::listing_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ListingItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
