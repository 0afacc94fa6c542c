use entity::sea_orm_active_enums::{CardNation, ItemType, Rarity};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    JoinType, QueryFilter, QuerySelect, RelationTrait,
};

/// Everything needed to create a card identity, with the candidate already
/// resolved to an id.
pub struct NewCardIdentity {
    pub card_code: Option<String>,
    pub card_name_id: Option<i32>,
    pub candidate_id: Option<i32>,
    pub nation: CardNation,
    pub rarity: Rarity,
}

pub struct ItemInfoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemInfoRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the item_info row and its card_info row together.
    ///
    /// The natural-key unique constraints on card_info surface here as a
    /// unique-violation `DbErr` when a concurrent resolution won the race;
    /// the resolver handles that by re-reading.
    pub async fn create_card(
        &self,
        card: NewCardIdentity,
    ) -> Result<entity::item_info::Model, DbErr> {
        let info = entity::item_info::ActiveModel {
            item_type: ActiveValue::Set(ItemType::Card),
            ..Default::default()
        };
        let info = info.insert(self.db).await?;

        let card_info = entity::card_info::ActiveModel {
            item_info_id: ActiveValue::Set(info.id),
            card_code: ActiveValue::Set(card.card_code),
            card_name_id: ActiveValue::Set(card.card_name_id),
            candidate_id: ActiveValue::Set(card.candidate_id),
            nation: ActiveValue::Set(card.nation),
            rarity: ActiveValue::Set(card.rarity),
        };
        card_info.insert(self.db).await?;

        Ok(info)
    }

    /// Creates the item_info row and its accessory_info row together.
    pub async fn create_accessory(&self, name: &str) -> Result<entity::item_info::Model, DbErr> {
        let info = entity::item_info::ActiveModel {
            item_type: ActiveValue::Set(ItemType::Accessory),
            ..Default::default()
        };
        let info = info.insert(self.db).await?;

        let accessory_info = entity::accessory_info::ActiveModel {
            item_info_id: ActiveValue::Set(info.id),
            name: ActiveValue::Set(name.to_string()),
        };
        accessory_info.insert(self.db).await?;

        Ok(info)
    }

    pub async fn find_card_by_code(
        &self,
        card_code: &str,
    ) -> Result<Option<entity::card_info::Model>, DbErr> {
        entity::prelude::CardInfo::find()
            .filter(entity::card_info::Column::CardCode.eq(card_code))
            .one(self.db)
            .await
    }

    pub async fn find_card_by_candidate(
        &self,
        candidate_id: i32,
        rarity: Rarity,
    ) -> Result<Option<entity::card_info::Model>, DbErr> {
        entity::prelude::CardInfo::find()
            .filter(entity::card_info::Column::CandidateId.eq(candidate_id))
            .filter(entity::card_info::Column::Rarity.eq(rarity))
            .one(self.db)
            .await
    }

    pub async fn find_card_by_name(
        &self,
        card_name_id: i32,
        rarity: Rarity,
    ) -> Result<Option<entity::card_info::Model>, DbErr> {
        entity::prelude::CardInfo::find()
            .filter(entity::card_info::Column::CardNameId.eq(card_name_id))
            .filter(entity::card_info::Column::Rarity.eq(rarity))
            .one(self.db)
            .await
    }

    pub async fn find_accessory_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::accessory_info::Model>, DbErr> {
        entity::prelude::AccessoryInfo::find()
            .filter(entity::accessory_info::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::item_info::Model>, DbErr> {
        entity::prelude::ItemInfo::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::item_info::Model>, DbErr> {
        entity::prelude::ItemInfo::find()
            .filter(entity::item_info::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn get_card_details(
        &self,
        info_ids: &[i32],
    ) -> Result<Vec<entity::card_info::Model>, DbErr> {
        entity::prelude::CardInfo::find()
            .filter(entity::card_info::Column::ItemInfoId.is_in(info_ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn get_accessory_details(
        &self,
        info_ids: &[i32],
    ) -> Result<Vec<entity::accessory_info::Model>, DbErr> {
        entity::prelude::AccessoryInfo::find()
            .filter(entity::accessory_info::Column::ItemInfoId.is_in(info_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Substring match over canonical card names, candidate names, and
    /// accessory names. Plain LIKE filter, no ranking.
    pub async fn search_by_name(
        &self,
        name_query: &str,
    ) -> Result<Vec<entity::item_info::Model>, DbErr> {
        entity::prelude::ItemInfo::find()
            .distinct()
            .join(JoinType::LeftJoin, entity::item_info::Relation::CardInfo.def())
            .join(
                JoinType::LeftJoin,
                entity::card_info::Relation::CardName.def(),
            )
            .join(
                JoinType::LeftJoin,
                entity::card_info::Relation::CardCandidate.def(),
            )
            .join(
                JoinType::LeftJoin,
                entity::item_info::Relation::AccessoryInfo.def(),
            )
            .filter(
                Condition::any()
                    .add(entity::card_name::Column::Name.contains(name_query))
                    .add(entity::card_candidate::Column::Name.contains(name_query))
                    .add(entity::accessory_info::Column::Name.contains(name_query)),
            )
            .all(self.db)
            .await
    }
}
