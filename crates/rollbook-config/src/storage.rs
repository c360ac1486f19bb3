use std::str::FromStr;

/// Identity store backend, selected by `STORAGE_BACKEND`.
///
/// `memory` keeps everything in process and loses it on restart; it exists
/// for local runs without a database.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown STORAGE_BACKEND `{0}` (expected `postgres` or `memory`)")]
pub struct UnknownStorageBackend(pub String);

impl FromStr for StorageBackend {
    type Err = UnknownStorageBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(UnknownStorageBackend(other.to_string())),
        }
    }
}

impl StorageBackend {
    pub fn from_env() -> Result<Self, UnknownStorageBackend> {
        match std::env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse(),
            Err(_) => Ok(Self::default()),
        }
    }
}
