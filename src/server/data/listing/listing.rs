use chrono::Utc;
use entity::sea_orm_active_enums::ListingStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct ListingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ListingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        title: &str,
        seller_id: i32,
        status: ListingStatus,
    ) -> Result<entity::listing::Model, DbErr> {
        let listing = entity::listing::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            seller_id: ActiveValue::Set(seller_id),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        listing.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::listing::Model>, DbErr> {
        entity::prelude::Listing::find_by_id(id).one(self.db).await
    }

    /// All listings except DELETED ones, newest first.
    pub async fn find_all(&self) -> Result<Vec<entity::listing::Model>, DbErr> {
        entity::prelude::Listing::find()
            .filter(entity::listing::Column::Status.ne(ListingStatus::Deleted))
            .order_by_desc(entity::listing::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
