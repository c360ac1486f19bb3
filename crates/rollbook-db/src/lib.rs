//! # Rollbook DB
//!
//! Identity storage for the Rollbook API.
//!
//! The application talks to storage only through the [`IdentityStore`]
//! trait, one handle per identity kind. Two backends implement it:
//!
//! - [`PgIdentityStore`]: PostgreSQL used as a document store. Each record is
//!   a JSONB document; its natural keys live in a separate table under a
//!   unique constraint, so duplicate detection is done by the database.
//! - [`MemoryIdentityStore`]: an in-process store with the same uniqueness
//!   semantics, used by tests and by `STORAGE_BACKEND=memory`.
//!
//! # Example
//!
//! ```ignore
//! use rollbook_config::DatabaseConfig;
//! use rollbook_db::{init_db_pool, run_migrations, PgIdentityStore};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
//! run_migrations(&pool).await?;
//! let store = PgIdentityStore::new(pool);
//! ```

pub mod memory;
pub mod postgres;
pub mod store;

use rollbook_config::DatabaseConfig;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;

pub use memory::MemoryIdentityStore;
pub use postgres::PgIdentityStore;
pub use store::{IdentityStore, StoreError, StoreResult};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens a PostgreSQL connection pool.
///
/// Should be called once during startup; the returned pool is cheaply
/// cloneable.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}

/// Applies the bundled schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}
