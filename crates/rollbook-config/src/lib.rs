//! # Rollbook Config
//!
//! Configuration types for the Rollbook API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: Database connection settings
//! - [`server`]: Listen address
//! - [`storage`]: Which identity store backend to run with
//!
//! # Example
//!
//! ```ignore
//! use rollbook_config::{CorsConfig, DatabaseConfig, ServerConfig, StorageBackend};
//!
//! // Load all configs from environment
//! let server_config = ServerConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let backend = StorageBackend::from_env()?;
//! let database_config = DatabaseConfig::from_env()?;
//! ```

pub mod cors;
pub mod database;
pub mod server;
pub mod storage;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::{DatabaseConfig, MissingDatabaseUrl};
pub use server::ServerConfig;
pub use storage::{StorageBackend, UnknownStorageBackend};

/// Reads and parses an environment variable, falling back to `default` when
/// it is unset or unparsable.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
