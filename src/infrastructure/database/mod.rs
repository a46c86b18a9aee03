pub mod entities;
pub mod repositories;
pub mod schema;

pub use schema::bootstrap_schema;

use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use tracing::info;

use crate::config::{DatabaseSettings, PoolConfig};

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./billing.db?mode=rwc")
    pub url: String,
    pub pool: PoolConfig,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::from(&DatabaseSettings::default())
    }
}

impl From<&DatabaseSettings> for DatabaseConfig {
    fn from(settings: &DatabaseSettings) -> Self {
        Self {
            url: settings.url.clone(),
            pool: settings.pool.clone(),
        }
    }
}

impl DatabaseConfig {
    /// Create config for a SQLite file, created if absent
    pub fn sqlite(path: &str) -> Self {
        Self {
            url: format!("sqlite://{}?mode=rwc", path),
            pool: PoolConfig::default(),
        }
    }

    fn connect_options(&self) -> ConnectOptions {
        let mut opts = ConnectOptions::new(self.url.clone());
        opts.max_connections(self.pool.max_connections)
            .min_connections(self.pool.min_connections)
            .connect_timeout(Duration::from_secs(self.pool.connect_timeout_secs))
            .idle_timeout(Duration::from_secs(self.pool.idle_timeout_secs))
            .sqlx_logging(false);
        opts
    }
}

/// Initialize the connection pool
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    info!(
        url = %config.url,
        max_connections = config.pool.max_connections,
        "Connecting to database"
    );
    let db = Database::connect(config.connect_options()).await?;
    info!("Database connected successfully");
    Ok(db)
}

/// Round-trip a trivial statement to prove the datastore is reachable.
pub async fn ping(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "SELECT 1".to_string(),
    ))
    .await?;
    Ok(())
}

/// In-memory SQLite with the schema in place.
///
/// The pool is pinned to one connection: every `sqlite::memory:`
/// connection is its own empty database.
#[cfg(test)]
pub(crate) async fn test_connection() -> DatabaseConnection {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        pool: PoolConfig {
            max_connections: 1,
            min_connections: 1,
            ..PoolConfig::default()
        },
    };
    let db = init_database(&config).await.unwrap();
    bootstrap_schema(&db).await.unwrap();
    db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ping_succeeds_on_open_pool() {
        let db = test_connection().await;
        assert!(ping(&db).await.is_ok());
    }

    #[tokio::test]
    async fn ping_fails_after_close() {
        let db = test_connection().await;
        let probe = db.clone();
        db.close().await.unwrap();
        assert!(ping(&probe).await.is_err());
    }

    #[test]
    fn config_from_settings() {
        let config = DatabaseConfig::from(&DatabaseSettings::default());
        assert_eq!(config.url, "sqlite://./billing.db?mode=rwc");
        assert_eq!(config.pool.max_connections, 10);
        assert_eq!(DatabaseConfig::sqlite("/tmp/x.db").url, "sqlite:///tmp/x.db?mode=rwc");
    }
}
