//! Listing repositories.
//!
//! Listing rows, their item link rows, and uploaded images. The image
//! repository owns the claim step of listing creation; image rows themselves
//! are created by the upload flow, never here.

pub mod listing;
pub mod listing_image;
pub mod listing_item;
