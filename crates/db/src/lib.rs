//! Document store adapters for the sections service.
//!
//! Implements the gateway ports from [`sections_core::store`] on top of
//! PostgreSQL (via sqlx) and an in-memory map.

pub mod config;
pub mod memory;
pub mod postgres;

use std::sync::Arc;
use std::time::Duration;

use sections_core::store::DocumentStore;
use sqlx::postgres::PgPoolOptions;

pub use config::{StoreBackend, StoreConfig};
pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

pub type DbPool = sqlx::PgPool;

/// Errors raised while bringing a store up.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("DATABASE_URL must be set for the postgres store backend")]
    MissingDatabaseUrl,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Create a connection pool from a database URL.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to verify connectivity.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Start the store selected by `config`.
///
/// For PostgreSQL this connects, checks health and applies migrations before
/// returning.
pub async fn connect(config: &StoreConfig) -> Result<Arc<dyn DocumentStore>, ConnectError> {
    match config.backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory document store; data will not survive restarts");
            Ok(Arc::new(MemoryDocumentStore::new()))
        }
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or(ConnectError::MissingDatabaseUrl)?;

            let pool = create_pool(
                url,
                config.max_connections,
                Duration::from_secs(config.timeout_secs),
            )
            .await?;
            tracing::info!("Database connection pool created");

            health_check(&pool).await?;
            tracing::info!("Database health check passed");

            run_migrations(&pool).await?;
            tracing::info!("Database migrations applied");

            Ok(Arc::new(PgDocumentStore::new(pool)))
        }
    }
}
