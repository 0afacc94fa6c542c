use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

/// One resolved line item, ready to be linked to a listing.
pub struct NewListingItem {
    pub info_id: i32,
    pub listing_image_id: Option<i32>,
    pub detail: Option<String>,
    pub condition: Option<String>,
    pub quantity: i32,
    pub price_per_unit: i32,
}

pub struct ListingItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ListingItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create_many(
        &self,
        listing_id: i32,
        items: Vec<NewListingItem>,
    ) -> Result<Vec<entity::listing_item::Model>, DbErr> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let items = items
            .into_iter()
            .map(|item| entity::listing_item::ActiveModel {
                listing_id: ActiveValue::Set(listing_id),
                info_id: ActiveValue::Set(item.info_id),
                listing_image_id: ActiveValue::Set(item.listing_image_id),
                detail: ActiveValue::Set(item.detail),
                condition: ActiveValue::Set(item.condition),
                quantity: ActiveValue::Set(item.quantity),
                price_per_unit: ActiveValue::Set(item.price_per_unit),
                ..Default::default()
            });

        entity::prelude::ListingItem::insert_many(items)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn find_by_listing_id(
        &self,
        listing_id: i32,
    ) -> Result<Vec<entity::listing_item::Model>, DbErr> {
        entity::prelude::ListingItem::find()
            .filter(entity::listing_item::Column::ListingId.eq(listing_id))
            .all(self.db)
            .await
    }

    /// Pairs of (item id, listing id) for a set of listings, for summary
    /// counts without loading full rows.
    pub async fn get_ids_by_listing_ids(
        &self,
        listing_ids: &[i32],
    ) -> Result<Vec<(i32, i32)>, DbErr> {
        entity::prelude::ListingItem::find()
            .select_only()
            .column(entity::listing_item::Column::Id)
            .column(entity::listing_item::Column::ListingId)
            .filter(entity::listing_item::Column::ListingId.is_in(listing_ids.iter().copied()))
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await
    }
}
