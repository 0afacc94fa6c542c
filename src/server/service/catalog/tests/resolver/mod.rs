mod conflict_retry;
mod resolve_accessory;
mod resolve_card;

use cardmarket_test_utils::prelude::*;
use entity::sea_orm_active_enums::{CardNation, Rarity};

use crate::{
    model::listing::{
        CreateAccessoryInfoDto, CreateCardInfoDto, CreateListingItemDto, ItemPayloadDto,
    },
    server::{
        error::{catalog::CatalogError, Error},
        service::catalog::resolver::{CardIdentityKey, ItemResolver},
    },
};

fn candidate_card(name: &str, rarity: Rarity) -> CreateCardInfoDto {
    CreateCardInfoDto {
        card_name_id: None,
        candidate_id: None,
        candidate_name: Some(name.to_string()),
        card_code: None,
        nation: CardNation::Kr,
        rarity,
    }
}

fn coded_card(code: &str) -> CreateCardInfoDto {
    CreateCardInfoDto {
        card_name_id: None,
        candidate_id: None,
        candidate_name: None,
        card_code: Some(code.to_string()),
        nation: CardNation::Kr,
        rarity: Rarity::Ul,
    }
}

fn card_item(card_info: Option<CreateCardInfoDto>) -> CreateListingItemDto {
    CreateListingItemDto {
        info_id: None,
        listing_image_id: None,
        detail: None,
        condition: None,
        quantity: 1,
        price_per_unit: 1000,
        payload: ItemPayloadDto::Card { card_info },
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
