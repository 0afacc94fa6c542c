use entity::sea_orm_active_enums::{CardNation, ItemType, Rarity};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::error::TestError;

/// Inserts catalog rows directly, bypassing the resolver, for tests that need
/// pre-existing identities.
pub struct CatalogFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_card_name(&self, name: &str) -> Result<entity::card_name::Model, TestError> {
        let model = entity::card_name::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        Ok(model.insert(self.db).await?)
    }

    pub async fn insert_candidate(
        &self,
        name: &str,
    ) -> Result<entity::card_candidate::Model, TestError> {
        let model = entity::card_candidate::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        Ok(model.insert(self.db).await?)
    }

    pub async fn insert_card_identity(
        &self,
        card_code: Option<&str>,
        card_name_id: Option<i32>,
        candidate_id: Option<i32>,
        rarity: Rarity,
    ) -> Result<(entity::item_info::Model, entity::card_info::Model), TestError> {
        let info = entity::item_info::ActiveModel {
            item_type: ActiveValue::Set(ItemType::Card),
            ..Default::default()
        };
        let info = info.insert(self.db).await?;

        let card = entity::card_info::ActiveModel {
            item_info_id: ActiveValue::Set(info.id),
            card_code: ActiveValue::Set(card_code.map(str::to_string)),
            card_name_id: ActiveValue::Set(card_name_id),
            candidate_id: ActiveValue::Set(candidate_id),
            nation: ActiveValue::Set(CardNation::Kr),
            rarity: ActiveValue::Set(rarity),
        };
        let card = card.insert(self.db).await?;

        Ok((info, card))
    }

    pub async fn insert_accessory_identity(
        &self,
        name: &str,
    ) -> Result<(entity::item_info::Model, entity::accessory_info::Model), TestError> {
        let info = entity::item_info::ActiveModel {
            item_type: ActiveValue::Set(ItemType::Accessory),
            ..Default::default()
        };
        let info = info.insert(self.db).await?;

        let accessory = entity::accessory_info::ActiveModel {
            item_info_id: ActiveValue::Set(info.id),
            name: ActiveValue::Set(name.to_string()),
        };
        let accessory = accessory.insert(self.db).await?;

        Ok((info, accessory))
    }

    pub async fn count_candidates(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::CardCandidate::find().count(self.db).await?)
    }

    pub async fn count_card_infos(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::CardInfo::find().count(self.db).await?)
    }

    pub async fn count_item_infos(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::ItemInfo::find().count(self.db).await?)
    }

    pub async fn count_accessory_infos(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::AccessoryInfo::find().count(self.db).await?)
    }
}
