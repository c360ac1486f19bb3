use std::sync::Arc;

use anyhow::Context;
use metrics_exporter_prometheus::PrometheusHandle;
use rollbook_config::{CorsConfig, DatabaseConfig, StorageBackend};
use rollbook_db::{
    IdentityStore, MemoryIdentityStore, PgIdentityStore, init_db_pool, run_migrations,
};
use rollbook_models::{Student, Teacher};
use tracing::{info, warn};

/// Shared application state.
///
/// Store handles are built once at startup and passed in; nothing in the
/// request path reaches for a global connection.
#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn IdentityStore<Student>>,
    pub teachers: Arc<dyn IdentityStore<Teacher>>,
    pub cors_config: CorsConfig,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(
        students: Arc<dyn IdentityStore<Student>>,
        teachers: Arc<dyn IdentityStore<Teacher>>,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            students,
            teachers,
            cors_config,
            metrics: None,
        }
    }

    /// State backed by empty in-process collections.
    pub fn in_memory(cors_config: CorsConfig) -> Self {
        Self::new(
            Arc::new(MemoryIdentityStore::<Student>::new()),
            Arc::new(MemoryIdentityStore::<Teacher>::new()),
            cors_config,
        )
    }

    pub fn with_metrics(mut self, handle: Option<PrometheusHandle>) -> Self {
        self.metrics = handle;
        self
    }
}

/// Builds the state from the environment, connecting to and migrating the
/// database when the postgres backend is selected.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let cors_config = CorsConfig::from_env();

    match StorageBackend::from_env()? {
        StorageBackend::Postgres => {
            let database_config = DatabaseConfig::from_env()?;
            let pool = init_db_pool(&database_config)
                .await
                .context("Failed to connect to database")?;
            run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
            info!(
                max_connections = database_config.max_connections,
                "Connected to PostgreSQL identity store"
            );

            let store = PgIdentityStore::new(pool);
            Ok(AppState::new(
                Arc::new(store.clone()),
                Arc::new(store),
                cors_config,
            ))
        }
        StorageBackend::Memory => {
            warn!("Using in-memory identity store; records are lost on restart");
            Ok(AppState::in_memory(cors_config))
        }
    }
}
