use std::collections::HashMap;

use sea_orm::ConnectionTrait;

use crate::{
    model::listing::{ListingImageDto, ListingItemViewDto, ListingSummaryDto, ListingViewDto},
    server::{
        data::{
            catalog::item_info::ItemInfoRepository,
            listing::{
                listing::ListingRepository, listing_image::ListingImageRepository,
                listing_item::ListingItemRepository,
            },
        },
        error::Error,
        service::catalog::view::load_item_info_views,
    },
};

fn image_dto(image: entity::listing_image::Model) -> ListingImageDto {
    ListingImageDto {
        id: image.id,
        listing_id: image.listing_id,
        url: image.url,
        order: image.order,
    }
}

/// Re-reads a listing with items, catalog details, and images materialized.
/// During creation this runs on the open transaction, so the caller gets the
/// exact state being committed.
pub(super) async fn load_listing_view<C: ConnectionTrait>(
    db: &C,
    listing_id: i32,
) -> Result<Option<ListingViewDto>, Error> {
    let Some(listing) = ListingRepository::new(db).get_by_id(listing_id).await? else {
        return Ok(None);
    };

    let items = ListingItemRepository::new(db)
        .find_by_listing_id(listing_id)
        .await?;
    let images = ListingImageRepository::new(db)
        .find_by_listing_id(listing_id)
        .await?;

    let info_ids: Vec<i32> = items.iter().map(|item| item.info_id).collect();
    let infos = ItemInfoRepository::new(db).get_by_ids(&info_ids).await?;
    let info_views: HashMap<i32, _> = load_item_info_views(db, infos)
        .await?
        .into_iter()
        .map(|view| (view.id, view))
        .collect();

    let items = items
        .into_iter()
        .filter_map(|item| {
            let item_info = info_views.get(&item.info_id).cloned()?;

            Some(ListingItemViewDto {
                id: item.id,
                listing_id: item.listing_id,
                info_id: item.info_id,
                listing_image_id: item.listing_image_id,
                detail: item.detail,
                condition: item.condition,
                quantity: item.quantity,
                price_per_unit: item.price_per_unit,
                item_info,
            })
        })
        .collect();

    Ok(Some(ListingViewDto {
        id: listing.id,
        title: listing.title,
        seller_id: listing.seller_id,
        status: listing.status,
        created_at: listing.created_at,
        updated_at: listing.updated_at,
        items,
        images: images.into_iter().map(image_dto).collect(),
    }))
}

/// Builds index-page summaries: item counts and the first image per listing.
pub(super) async fn load_listing_summaries<C: ConnectionTrait>(
    db: &C,
    listings: Vec<entity::listing::Model>,
) -> Result<Vec<ListingSummaryDto>, Error> {
    if listings.is_empty() {
        return Ok(Vec::new());
    }

    let listing_ids: Vec<i32> = listings.iter().map(|listing| listing.id).collect();

    let item_pairs = ListingItemRepository::new(db)
        .get_ids_by_listing_ids(&listing_ids)
        .await?;
    let mut item_counts: HashMap<i32, u32> = HashMap::new();
    for (_, listing_id) in item_pairs {
        *item_counts.entry(listing_id).or_default() += 1;
    }

    // Images come back ordered, so the first one seen per listing is the
    // thumbnail.
    let images = ListingImageRepository::new(db)
        .find_by_listing_ids(&listing_ids)
        .await?;
    let mut thumbnails: HashMap<i32, String> = HashMap::new();
    for image in images {
        if let Some(listing_id) = image.listing_id {
            thumbnails.entry(listing_id).or_insert(image.url);
        }
    }

    let summaries = listings
        .into_iter()
        .map(|listing| ListingSummaryDto {
            id: listing.id,
            title: listing.title,
            seller_id: listing.seller_id,
            status: listing.status,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
            item_count: item_counts.get(&listing.id).copied().unwrap_or(0),
            thumbnail_url: thumbnails.remove(&listing.id),
        })
        .collect();

    Ok(summaries)
}
