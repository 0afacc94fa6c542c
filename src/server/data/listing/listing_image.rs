use migration::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct ListingImageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ListingImageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Claims uploaded images for a listing.
    ///
    /// Only rows that are still unattached (`listing_id IS NULL`) are
    /// updated; ids already owned by another listing are silently left
    /// alone, so a stale or replayed id can never steal an image. Returns
    /// the number of rows actually claimed.
    pub async fn claim_for_listing(
        &self,
        listing_id: i32,
        image_ids: &[i32],
    ) -> Result<u64, DbErr> {
        let image_ids: Vec<i32> = image_ids.iter().copied().filter(|id| *id > 0).collect();

        if image_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::ListingImage::update_many()
            .col_expr(
                entity::listing_image::Column::ListingId,
                Expr::value(listing_id),
            )
            .filter(entity::listing_image::Column::Id.is_in(image_ids))
            .filter(entity::listing_image::Column::ListingId.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::listing_image::Model>, DbErr> {
        entity::prelude::ListingImage::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_by_listing_id(
        &self,
        listing_id: i32,
    ) -> Result<Vec<entity::listing_image::Model>, DbErr> {
        entity::prelude::ListingImage::find()
            .filter(entity::listing_image::Column::ListingId.eq(listing_id))
            .order_by_asc(entity::listing_image::Column::Order)
            .all(self.db)
            .await
    }

    pub async fn find_by_listing_ids(
        &self,
        listing_ids: &[i32],
    ) -> Result<Vec<entity::listing_image::Model>, DbErr> {
        entity::prelude::ListingImage::find()
            .filter(entity::listing_image::Column::ListingId.is_in(listing_ids.iter().copied()))
            .order_by_asc(entity::listing_image::Column::Order)
            .all(self.db)
            .await
    }
}
