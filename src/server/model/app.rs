use sea_orm::DatabaseConnection;

use crate::server::service::cleaner::NameCleaner;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub cleaner: NameCleaner,
}
