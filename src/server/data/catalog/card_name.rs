use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct CardNameRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CardNameRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Atomic get-or-create keyed by the unique canonical name.
    pub async fn upsert(&self, name: &str) -> Result<entity::card_name::Model, DbErr> {
        let card_name = entity::card_name::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        entity::prelude::CardName::insert(card_name)
            .on_conflict(
                OnConflict::column(entity::card_name::Column::Name)
                    .update_column(entity::card_name::Column::Name)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::card_name::Model>, DbErr> {
        entity::prelude::CardName::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::card_name::Model>, DbErr> {
        entity::prelude::CardName::find()
            .filter(entity::card_name::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }
}
