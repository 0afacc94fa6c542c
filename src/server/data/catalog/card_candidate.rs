use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct CardCandidateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CardCandidateRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Atomic get-or-create keyed by the unique candidate name.
    ///
    /// Runs as a single `INSERT .. ON CONFLICT DO UPDATE .. RETURNING`, so
    /// concurrent submissions referencing the same new name all receive the
    /// same row. The no-op update on conflict is what makes RETURNING yield
    /// the existing row instead of nothing.
    pub async fn upsert(&self, name: &str) -> Result<entity::card_candidate::Model, DbErr> {
        let candidate = entity::card_candidate::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        entity::prelude::CardCandidate::insert(candidate)
            .on_conflict(
                OnConflict::column(entity::card_candidate::Column::Name)
                    .update_column(entity::card_candidate::Column::Name)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::card_candidate::Model>, DbErr> {
        entity::prelude::CardCandidate::find()
            .filter(entity::card_candidate::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn get_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<Vec<entity::card_candidate::Model>, DbErr> {
        entity::prelude::CardCandidate::find()
            .filter(entity::card_candidate::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }
}
