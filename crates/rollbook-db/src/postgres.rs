//! PostgreSQL identity store.
//!
//! Records are stored as JSONB documents in `identities`, partitioned by
//! `collection`. Each natural key returned by [`Identity::unique_keys`] gets a
//! row in `identity_keys`, whose primary key is
//! `(collection, key_name, key_value)`. The document and its keys are written
//! in one transaction, so a unique violation on any key rolls the whole
//! record back.

use async_trait::async_trait;
use rollbook_models::{Identity, StoredIdentity};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use tracing::debug;
use uuid::Uuid;

use crate::store::{IdentityStore, StoreError, StoreResult};

#[derive(Clone, Debug)]
pub struct PgIdentityStore {
    db: PgPool,
}

#[derive(FromRow)]
struct CredentialRow {
    document: Json<serde_json::Value>,
    password_hash: String,
}

#[derive(FromRow)]
struct DocumentRow {
    document: Json<serde_json::Value>,
}

impl PgIdentityStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub fn pool(&self) -> &PgPool {
        &self.db
    }
}

fn decode<I: Identity>(document: Json<serde_json::Value>) -> StoreResult<I> {
    Ok(serde_json::from_value(document.0)?)
}

async fn insert_key(
    tx: &mut Transaction<'_, Postgres>,
    collection: &str,
    key_name: &'static str,
    key_value: &str,
    identity_id: Uuid,
) -> StoreResult<()> {
    sqlx::query(
        "INSERT INTO identity_keys (collection, key_name, key_value, identity_id)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(collection)
    .bind(key_name)
    .bind(key_value)
    .bind(identity_id)
    .execute(&mut **tx)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                return StoreError::Duplicate { key: key_name };
            }
        }
        StoreError::Database(e)
    })?;

    Ok(())
}

#[async_trait]
impl<I: Identity> IdentityStore<I> for PgIdentityStore {
    async fn insert(&self, record: StoredIdentity<I>) -> StoreResult<I> {
        let collection = I::ROLE.collection();
        let identity = record.identity;
        let document = serde_json::to_value(&identity)?;

        let mut tx = self.db.begin().await?;

        sqlx::query(
            "INSERT INTO identities (id, collection, document, password_hash, created_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(identity.id())
        .bind(collection)
        .bind(Json(document))
        .bind(&record.password_hash)
        .bind(identity.created_at())
        .execute(&mut *tx)
        .await?;

        for key in identity.unique_keys() {
            insert_key(&mut tx, collection, key.name, key.value, identity.id()).await?;
        }

        tx.commit().await?;

        debug!(collection, id = %identity.id(), "Inserted identity document");
        Ok(identity)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<StoredIdentity<I>>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT i.document, i.password_hash
             FROM identity_keys k
             JOIN identities i ON i.id = k.identity_id
             WHERE k.collection = $1 AND k.key_name = 'email' AND k.key_value = $2",
        )
        .bind(I::ROLE.collection())
        .bind(email)
        .fetch_optional(&self.db)
        .await?;

        match row {
            Some(row) => Ok(Some(StoredIdentity::new(
                decode(row.document)?,
                row.password_hash,
            ))),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<I>> {
        let row = sqlx::query_as::<_, DocumentRow>(
            "SELECT document FROM identities WHERE collection = $1 AND id = $2",
        )
        .bind(I::ROLE.collection())
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        row.map(|row| decode(row.document)).transpose()
    }

    async fn list_all(&self) -> StoreResult<Vec<I>> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            "SELECT document FROM identities
             WHERE collection = $1
             ORDER BY created_at, id",
        )
        .bind(I::ROLE.collection())
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(|row| decode(row.document)).collect()
    }
}
