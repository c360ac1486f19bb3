use async_trait::async_trait;
use rollbook_models::{Identity, StoredIdentity};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Another record in the collection already holds this natural key.
    #[error("duplicate value for unique key `{key}`")]
    Duplicate { key: &'static str },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("malformed stored document: {0}")]
    Document(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence for one identity kind.
///
/// `insert` must be atomic with respect to the record's unique keys: of two
/// concurrent inserts sharing a key, exactly one succeeds and the other
/// fails with [`StoreError::Duplicate`].
#[async_trait]
pub trait IdentityStore<I: Identity>: Send + Sync {
    async fn insert(&self, record: StoredIdentity<I>) -> StoreResult<I>;

    /// Exact match on the already-normalized email. The only lookup that
    /// returns the password hash.
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<StoredIdentity<I>>>;

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<I>>;

    /// All records, oldest first.
    async fn list_all(&self) -> StoreResult<Vec<I>>;
}
