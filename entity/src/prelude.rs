pub use super::accessory_info::Entity as AccessoryInfo;
pub use super::card_candidate::Entity as CardCandidate;
pub use super::card_info::Entity as CardInfo;
pub use super::card_name::Entity as CardName;
pub use super::item_info::Entity as ItemInfo;
pub use super::listing::Entity as Listing;
pub use super::listing_image::Entity as ListingImage;
pub use super::listing_item::Entity as ListingItem;
