use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ListingStatus {
    #[sea_orm(string_value = "ON_SALE")]
    #[serde(rename = "ON_SALE")]
    OnSale,
    #[sea_orm(string_value = "SOLD")]
    #[serde(rename = "SOLD")]
    Sold,
    #[sea_orm(string_value = "DELETED")]
    #[serde(rename = "DELETED")]
    Deleted,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ItemType {
    #[sea_orm(string_value = "CARD")]
    #[serde(rename = "CARD")]
    Card,
    #[sea_orm(string_value = "ACCESSORY")]
    #[serde(rename = "ACCESSORY")]
    Accessory,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum CardNation {
    #[sea_orm(string_value = "KR")]
    #[serde(rename = "KR")]
    Kr,
    #[sea_orm(string_value = "JP")]
    #[serde(rename = "JP")]
    Jp,
    #[sea_orm(string_value = "EN")]
    #[serde(rename = "EN")]
    En,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum Rarity {
    #[sea_orm(string_value = "N")]
    N,
    #[sea_orm(string_value = "R")]
    R,
    #[sea_orm(string_value = "SR")]
    #[serde(rename = "SR")]
    Sr,
    #[sea_orm(string_value = "UR")]
    #[serde(rename = "UR")]
    Ur,
    #[sea_orm(string_value = "UL")]
    #[serde(rename = "UL")]
    Ul,
}
