pub use sea_orm_migration::prelude::*;

mod m20260105_000001_card_name;
mod m20260105_000002_card_candidate;
mod m20260105_000003_item_info;
mod m20260105_000004_card_info;
mod m20260105_000005_accessory_info;
mod m20260105_000006_listing;
mod m20260105_000007_listing_image;
mod m20260105_000008_listing_item;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_card_name::Migration),
            Box::new(m20260105_000002_card_candidate::Migration),
            Box::new(m20260105_000003_item_info::Migration),
            Box::new(m20260105_000004_card_info::Migration),
            Box::new(m20260105_000005_accessory_info::Migration),
            Box::new(m20260105_000006_listing::Migration),
            Box::new(m20260105_000007_listing_image::Migration),
            Box::new(m20260105_000008_listing_item::Migration),
        ]
    }
}
