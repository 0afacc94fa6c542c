pub mod prelude;

pub mod accessory_info;
pub mod card_candidate;
pub mod card_info;
pub mod card_name;
pub mod item_info;
pub mod listing;
pub mod listing_image;
pub mod listing_item;
pub mod sea_orm_active_enums;
