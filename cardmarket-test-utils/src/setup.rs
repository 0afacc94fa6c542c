use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{
    error::TestError,
    fixtures::{catalog::CatalogFixtures, listing::ListingFixtures},
};

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub server: ServerGuard,
    pub state: TestAppState,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            server: mock_server,
            state: TestAppState { db },
            mocks: Vec::new(),
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Adds the composite unique indexes on card_info that the production
    /// migration declares but entity-derived schemas cannot express. Tests
    /// covering the resolver's conflict handling on composite keys need these.
    pub async fn with_card_info_indexes(&self) -> Result<(), TestError> {
        self.state
            .db
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_card_info_candidate_id_rarity \
                 ON card_info (candidate_id, rarity)",
            )
            .await?;
        self.state
            .db
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_card_info_card_name_id_rarity \
                 ON card_info (card_name_id, rarity)",
            )
            .await?;

        Ok(())
    }

    /// Fixture helpers for catalog tables (item_info, card_info, names).
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures::new(&self.state.db)
    }

    /// Fixture helpers for listing tables (listing, items, images).
    pub fn listing(&self) -> ListingFixtures<'_> {
        ListingFixtures::new(&self.state.db)
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates every cardmarket table plus the card_info composite unique
/// indexes, for tests that exercise the whole listing-creation flow.
#[macro_export]
macro_rules! test_setup_with_all_tables {
    () => {{
        async {
            let setup = $crate::test_setup_with_tables!(
                entity::prelude::CardName,
                entity::prelude::CardCandidate,
                entity::prelude::ItemInfo,
                entity::prelude::CardInfo,
                entity::prelude::AccessoryInfo,
                entity::prelude::Listing,
                entity::prelude::ListingImage,
                entity::prelude::ListingItem,
            )?;
            setup.with_card_info_indexes().await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
