use crate::server::{config::Config, error::Error, service::cleaner::NameCleaner};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run database migrations.");

    Ok(db)
}

/// Build the name-cleaner client from configuration
pub fn build_name_cleaner(config: &Config) -> NameCleaner {
    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; the clean-names endpoint will be unavailable");
    }

    NameCleaner::from_config(config)
}
