mod atomic_rollback;
mod images;
mod reuses_identity;
mod with_card_item;

use cardmarket_test_utils::prelude::*;
use entity::sea_orm_active_enums::{CardNation, ListingStatus, Rarity};

use crate::{
    model::listing::{
        CreateAccessoryInfoDto, CreateCardInfoDto, CreateListingDto, CreateListingItemDto,
        ItemPayloadDto,
    },
    server::{
        error::{catalog::CatalogError, listing::ListingError, Error},
        service::listing::ListingService,
    },
};

fn candidate_card_item(name: &str, rarity: Rarity) -> CreateListingItemDto {
    CreateListingItemDto {
        info_id: None,
        listing_image_id: None,
        detail: None,
        condition: None,
        quantity: 1,
        price_per_unit: 1000,
        payload: ItemPayloadDto::Card {
            card_info: Some(CreateCardInfoDto {
                card_name_id: None,
                candidate_id: None,
                candidate_name: Some(name.to_string()),
                card_code: None,
                nation: CardNation::Kr,
                rarity,
            }),
        },
    }
}

fn accessory_item(name: &str) -> CreateListingItemDto {
    CreateListingItemDto {
        info_id: None,
        listing_image_id: None,
        detail: None,
        condition: None,
        quantity: 1,
        price_per_unit: 1000,
        payload: ItemPayloadDto::Accessory {
            accessory_info: Some(CreateAccessoryInfoDto {
                name: name.to_string(),
            }),
        },
    }
}

fn invalid_card_item() -> CreateListingItemDto {
    CreateListingItemDto {
        info_id: None,
        listing_image_id: None,
        detail: None,
        condition: None,
        quantity: 1,
        price_per_unit: 1000,
        payload: ItemPayloadDto::Card { card_info: None },
    }
}

fn listing_dto(items: Vec<CreateListingItemDto>, image_ids: Vec<i32>) -> CreateListingDto {
    CreateListingDto {
        title: "t".to_string(),
        seller_id: 1,
        status: None,
        items,
        image_ids,
    }
}
