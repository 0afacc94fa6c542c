mod view;

#[cfg(test)]
mod tests;

use entity::sea_orm_active_enums::ListingStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::listing::{CreateListingDto, ListingSummaryDto, ListingViewDto},
    server::{
        data::listing::{
            listing::ListingRepository,
            listing_image::ListingImageRepository,
            listing_item::{ListingItemRepository, NewListingItem},
        },
        error::{listing::ListingError, Error},
        service::catalog::resolver::ItemResolver,
    },
};

pub struct ListingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListingService<'a> {
    /// Creates a new instance of [`ListingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Executes one listing submission as a single atomic unit: the listing
    /// row, identity resolution for every item, the item link rows, and the
    /// image claim all commit together or not at all.
    pub async fn create_listing(&self, dto: CreateListingDto) -> Result<ListingViewDto, Error> {
        // Rejected before any storage interaction; no partial listing can
        // exist for an empty submission.
        if dto.items.is_empty() {
            return Err(ListingError::EmptyItemSet.into());
        }

        let txn = self.db.begin().await?;

        let status = dto.status.unwrap_or(ListingStatus::OnSale);
        let listing = ListingRepository::new(&txn)
            .create(&dto.title, dto.seller_id, status)
            .await?;

        let resolver = ItemResolver::new(&txn);
        let mut new_items = Vec::with_capacity(dto.items.len());
        for item in &dto.items {
            let info_id = resolver.resolve(item).await?;

            new_items.push(NewListingItem {
                info_id,
                listing_image_id: item.listing_image_id,
                detail: item.detail.clone(),
                condition: item.condition.clone(),
                quantity: item.quantity,
                price_per_unit: item.price_per_unit,
            });
        }

        ListingItemRepository::new(&txn)
            .create_many(listing.id, new_items)
            .await?;

        let requested = dto.image_ids.len() as u64;
        let claimed = ListingImageRepository::new(&txn)
            .claim_for_listing(listing.id, &dto.image_ids)
            .await?;
        if claimed < requested {
            // Stale or foreign image ids are skipped, never fatal.
            tracing::warn!(
                listing_id = listing.id,
                requested,
                claimed,
                "some requested images were unavailable and were not attached"
            );
        }

        let view = view::load_listing_view(&txn, listing.id)
            .await?
            .ok_or(ListingError::ListingNotFound(listing.id))?;

        txn.commit().await?;

        Ok(view)
    }

    pub async fn get_listing(&self, id: i32) -> Result<ListingViewDto, Error> {
        view::load_listing_view(self.db, id)
            .await?
            .ok_or_else(|| ListingError::ListingNotFound(id).into())
    }

    /// Listing summaries, newest first, DELETED listings excluded.
    pub async fn get_listings(&self) -> Result<Vec<ListingSummaryDto>, Error> {
        let listings = ListingRepository::new(self.db).find_all().await?;

        view::load_listing_summaries(self.db, listings).await
    }
}
