use chrono::Utc;
use entity::sea_orm_active_enums::ListingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::error::TestError;

pub struct ListingFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListingFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_listing(
        &self,
        title: &str,
        seller_id: i32,
        status: ListingStatus,
    ) -> Result<entity::listing::Model, TestError> {
        let model = entity::listing::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            seller_id: ActiveValue::Set(seller_id),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(model.insert(self.db).await?)
    }

    /// Inserts an uploaded-but-unattached image, as the upload flow would.
    pub async fn insert_unattached_image(
        &self,
        url: &str,
        order: Option<i32>,
    ) -> Result<entity::listing_image::Model, TestError> {
        let model = entity::listing_image::ActiveModel {
            listing_id: ActiveValue::Set(None),
            url: ActiveValue::Set(url.to_string()),
            order: ActiveValue::Set(order),
            ..Default::default()
        };

        Ok(model.insert(self.db).await?)
    }

    /// Inserts an image already bound to a listing.
    pub async fn insert_image_for(
        &self,
        listing_id: i32,
        url: &str,
        order: Option<i32>,
    ) -> Result<entity::listing_image::Model, TestError> {
        let model = entity::listing_image::ActiveModel {
            listing_id: ActiveValue::Set(Some(listing_id)),
            url: ActiveValue::Set(url.to_string()),
            order: ActiveValue::Set(order),
            ..Default::default()
        };

        Ok(model.insert(self.db).await?)
    }

    pub async fn insert_listing_item(
        &self,
        listing_id: i32,
        info_id: i32,
        quantity: i32,
        price_per_unit: i32,
    ) -> Result<entity::listing_item::Model, TestError> {
        let model = entity::listing_item::ActiveModel {
            listing_id: ActiveValue::Set(listing_id),
            info_id: ActiveValue::Set(info_id),
            quantity: ActiveValue::Set(quantity),
            price_per_unit: ActiveValue::Set(price_per_unit),
            ..Default::default()
        };

        Ok(model.insert(self.db).await?)
    }

    pub async fn count_listings(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::Listing::find().count(self.db).await?)
    }

    pub async fn count_listing_items(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::ListingItem::find().count(self.db).await?)
    }

    pub async fn get_image(
        &self,
        id: i32,
    ) -> Result<Option<entity::listing_image::Model>, TestError> {
        Ok(entity::prelude::ListingImage::find_by_id(id)
            .one(self.db)
            .await?)
    }
}
