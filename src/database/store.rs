use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::database::directors::DirectorRepository;
use crate::database::movies::MovieRepository;

/// Errors from the store layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database URL {url}: {source}")]
    InvalidDatabaseUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Handle to the SQLite catalog, opened once at startup and shared by every handler.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let mut options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|source| DatabaseError::InvalidDatabaseUrl {
                url: config.url.clone(),
                source,
            })?
            .create_if_missing(true);

        if !config.enable_query_logging {
            options = options.disable_statement_logging();
        }

        // An in-memory database lives exactly as long as its connection,
        // so connections are never recycled.
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        info!("Opened movie store at {}", config.url);
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn movies(&self) -> MovieRepository<'_> {
        MovieRepository::new(&self.pool)
    }

    pub fn directors(&self) -> DirectorRepository<'_> {
        DirectorRepository::new(&self.pool)
    }

    /// Pings the store to ensure connectivity
    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed movie store");
    }
}
