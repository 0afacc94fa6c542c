pub mod resolver;
pub mod view;

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::listing::ItemInfoViewDto,
    server::{
        data::catalog::item_info::ItemInfoRepository,
        error::{catalog::CatalogError, Error},
    },
};

/// Read side of the catalog: item info lookups and name search.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_item_info(&self, id: i32) -> Result<ItemInfoViewDto, Error> {
        let item_info_repo = ItemInfoRepository::new(self.db);

        let info = item_info_repo
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::ItemInfoNotFound(id))?;

        let mut views = view::load_item_info_views(self.db, vec![info]).await?;

        views
            .pop()
            .ok_or_else(|| CatalogError::ItemInfoNotFound(id).into())
    }

    /// Substring search over card names, candidate names, and accessory
    /// names; an empty query returns an empty result rather than the whole
    /// catalog.
    pub async fn search_item_info(&self, name_query: &str) -> Result<Vec<ItemInfoViewDto>, Error> {
        if name_query.is_empty() {
            return Ok(Vec::new());
        }

        let item_info_repo = ItemInfoRepository::new(self.db);
        let infos = item_info_repo.search_by_name(name_query).await?;

        Ok(view::load_item_info_views(self.db, infos).await?)
    }
}
