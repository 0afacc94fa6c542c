use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Uploaded image row. `listing_id` stays null until the image is claimed by
/// a listing during listing creation; it is never reassigned afterwards.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "listing_image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub listing_id: Option<i32>,
    pub url: String,
    pub order: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::listing::Entity",
        from = "Column::ListingId",
        to = "super::listing::Column::Id"
    )]
    Listing,
    #[sea_orm(has_many = "super::listing_item::Entity")]
    ListingItem,
}

impl Related<super::listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Listing.def()
    }
}

impl Related<super::listing_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ListingItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
