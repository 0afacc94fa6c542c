use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{CardNation, ItemType, ListingStatus, Rarity};
use serde::{Deserialize, Serialize};

/// A listing submission. `seller_id` comes from the request body until
/// authentication lands, after which it moves to the session.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingDto {
    pub title: String,
    pub seller_id: i32,
    /// Defaults to ON_SALE when omitted.
    pub status: Option<ListingStatus>,
    #[serde(default)]
    pub items: Vec<CreateListingItemDto>,
    /// Ids of previously uploaded, unattached images to claim.
    #[serde(default)]
    pub image_ids: Vec<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingItemDto {
    /// Set when the client re-references a known catalog entry; resolution
    /// returns it as-is.
    pub info_id: Option<i32>,
    pub listing_image_id: Option<i32>,
    pub detail: Option<String>,
    pub condition: Option<String>,
    pub quantity: i32,
    pub price_per_unit: i32,
    #[serde(flatten)]
    pub payload: ItemPayloadDto,
}

/// Item payload discriminated by the `type` field of the wire format.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ItemPayloadDto {
    #[serde(rename = "CARD", rename_all = "camelCase")]
    Card { card_info: Option<CreateCardInfoDto> },
    #[serde(rename = "ACCESSORY", rename_all = "camelCase")]
    Accessory {
        accessory_info: Option<CreateAccessoryInfoDto>,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardInfoDto {
    /// Existing canonical card name; one of card_name_id / candidate_id /
    /// candidate_name is enough.
    pub card_name_id: Option<i32>,
    /// Existing candidate card name.
    pub candidate_id: Option<i32>,
    /// New, not-yet-catalogued card name; triggers a candidate get-or-create.
    pub candidate_name: Option<String>,
    /// Printed card code, e.g. "DUAD-KR049"; globally unique when present.
    pub card_code: Option<String>,
    pub nation: CardNation,
    pub rarity: Rarity,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateAccessoryInfoDto {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingViewDto {
    pub id: i32,
    pub title: String,
    pub seller_id: i32,
    pub status: ListingStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub items: Vec<ListingItemViewDto>,
    pub images: Vec<ListingImageDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingItemViewDto {
    pub id: i32,
    pub listing_id: i32,
    pub info_id: i32,
    pub listing_image_id: Option<i32>,
    pub detail: Option<String>,
    pub condition: Option<String>,
    pub quantity: i32,
    pub price_per_unit: i32,
    pub item_info: ItemInfoViewDto,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInfoViewDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub card_info: Option<CardInfoViewDto>,
    pub accessory_info: Option<AccessoryInfoViewDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfoViewDto {
    pub item_info_id: i32,
    pub card_code: Option<String>,
    pub nation: CardNation,
    pub rarity: Rarity,
    pub card_name: Option<CardNameDto>,
    pub candidate: Option<CardCandidateDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardNameDto {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardCandidateDto {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryInfoViewDto {
    pub item_info_id: i32,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingImageDto {
    pub id: i32,
    pub listing_id: Option<i32>,
    pub url: String,
    pub order: Option<i32>,
}

/// Compact row for the listing index page.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSummaryDto {
    pub id: i32,
    pub title: String,
    pub seller_id: i32,
    pub status: ListingStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub item_count: u32,
    pub thumbnail_url: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ItemSearchQueryDto {
    pub name: Option<String>,
}
