//! Catalog identity repositories.
//!
//! These back the item identity resolver: card/accessory info keyed by their
//! natural identity, plus the canonical and candidate card-name tables.

pub mod card_candidate;
pub mod card_name;
pub mod item_info;
