use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "listing_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub listing_id: i32,
    pub info_id: i32,
    pub listing_image_id: Option<i32>,
    pub detail: Option<String>,
    pub condition: Option<String>,
    pub quantity: i32,
    pub price_per_unit: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::listing::Entity",
        from = "Column::ListingId",
        to = "super::listing::Column::Id"
    )]
    Listing,
    #[sea_orm(
        belongs_to = "super::item_info::Entity",
        from = "Column::InfoId",
        to = "super::item_info::Column::Id"
    )]
    ItemInfo,
    #[sea_orm(
        belongs_to = "super::listing_image::Entity",
        from = "Column::ListingImageId",
        to = "super::listing_image::Column::Id"
    )]
    ListingImage,
}

impl Related<super::listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Listing.def()
    }
}

impl Related<super::item_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItemInfo.def()
    }
}

impl Related<super::listing_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ListingImage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
