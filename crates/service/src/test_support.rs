#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Fresh in-memory SQLite database with all migrations applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Throwaway MongoDB database, or `None` when `MONGO_URI` is not set.
pub async fn get_mongo() -> Result<Option<mongodb::Database>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        eprintln!("SKIP_DB_TESTS set; skipping MongoDB test");
        return Ok(None);
    }
    let uri = match std::env::var("MONGO_URI") {
        Ok(uri) => uri,
        Err(_) => {
            eprintln!("MONGO_URI missing; skipping MongoDB test");
            return Ok(None);
        }
    };
    let cfg = configs::MongoConfig {
        uri,
        database: Some(format!("crud_test_{}", uuid::Uuid::new_v4().simple())),
        connect_timeout_secs: 5,
    };
    Ok(Some(models::mongo::connect(&cfg, "unused").await?))
}
