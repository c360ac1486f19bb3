//! In-memory identity store for development and testing.

use std::collections::HashMap;

use async_trait::async_trait;
use rollbook_models::{Identity, StoredIdentity};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{IdentityStore, StoreError, StoreResult};

/// One collection held in process.
///
/// Key checks and the insert happen under a single write lock, which gives
/// the same all-or-nothing uniqueness as the database backend.
pub struct MemoryIdentityStore<I> {
    inner: RwLock<Collection<I>>,
}

struct Collection<I> {
    // Insertion order doubles as creation order.
    records: Vec<StoredIdentity<I>>,
    by_id: HashMap<Uuid, usize>,
    keys: HashMap<(&'static str, String), Uuid>,
}

impl<I> MemoryIdentityStore<I> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Collection {
                records: Vec::new(),
                by_id: HashMap::new(),
                keys: HashMap::new(),
            }),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<I> Default for MemoryIdentityStore<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<I: Identity> IdentityStore<I> for MemoryIdentityStore<I> {
    async fn insert(&self, record: StoredIdentity<I>) -> StoreResult<I> {
        let mut collection = self.inner.write().await;
        let id = record.identity.id();

        let keys: Vec<(&'static str, String)> = record
            .identity
            .unique_keys()
            .into_iter()
            .map(|key| (key.name, key.value.to_string()))
            .collect();

        if let Some((name, _)) = keys.iter().find(|key| collection.keys.contains_key(*key)) {
            return Err(StoreError::Duplicate { key: *name });
        }

        for key in keys {
            collection.keys.insert(key, id);
        }
        let index = collection.records.len();
        collection.by_id.insert(id, index);
        collection.records.push(record.clone());

        Ok(record.identity)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<StoredIdentity<I>>> {
        let collection = self.inner.read().await;
        let found = collection
            .keys
            .get(&("email", email.to_string()))
            .and_then(|id| collection.by_id.get(id))
            .map(|&index| collection.records[index].clone());

        Ok(found)
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<I>> {
        let collection = self.inner.read().await;
        Ok(collection
            .by_id
            .get(&id)
            .map(|&index| collection.records[index].identity.clone()))
    }

    async fn list_all(&self) -> StoreResult<Vec<I>> {
        let collection = self.inner.read().await;
        Ok(collection
            .records
            .iter()
            .map(|record| record.identity.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use chrono::Utc;
    use rollbook_models::{Registration, RegisterStudentDto, RegisterTeacherDto, Student, Teacher};

    fn student(email: &str, prn: &str) -> StoredIdentity<Student> {
        let dto = RegisterStudentDto {
            name: "A".to_string(),
            prn: prn.to_string(),
            department: "CS".to_string(),
            division: "A".to_string(),
            email: email.to_string(),
            password: "pw1".to_string(),
        };
        StoredIdentity::new(
            dto.into_identity(Uuid::new_v4(), Utc::now()),
            "$2b$10$hash".to_string(),
        )
    }

    fn teacher(email: &str) -> StoredIdentity<Teacher> {
        let dto = RegisterTeacherDto {
            name: "T".to_string(),
            email: email.to_string(),
            department: "CS".to_string(),
            designation: None,
            password: "pw".to_string(),
        };
        StoredIdentity::new(
            dto.into_identity(Uuid::new_v4(), Utc::now()),
            "$2b$10$hash".to_string(),
        )
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store: MemoryIdentityStore<Student> = MemoryIdentityStore::new();
        let inserted = store.insert(student("a@x.com", "P1")).await.unwrap();

        let by_id = store.find_by_id(inserted.id).await.unwrap().unwrap();
        assert_eq!(by_id, inserted);

        let by_email = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(by_email.identity, inserted);
        assert_eq!(by_email.password_hash, "$2b$10$hash");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store: MemoryIdentityStore<Student> = MemoryIdentityStore::new();
        store.insert(student("a@x.com", "P1")).await.unwrap();

        let err = store.insert(student("a@x.com", "P2")).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { key: "email" }));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_prn_rejected_without_partial_keys() {
        let store: MemoryIdentityStore<Student> = MemoryIdentityStore::new();
        store.insert(student("a@x.com", "P1")).await.unwrap();

        let err = store.insert(student("b@x.com", "P1")).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { key: "prn" }));

        // The rejected record's email must not have been claimed.
        assert!(store.find_by_email("b@x.com").await.unwrap().is_none());
        store.insert(student("b@x.com", "P2")).await.unwrap();
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_teacher_email_unique() {
        let store: MemoryIdentityStore<Teacher> = MemoryIdentityStore::new();
        store.insert(teacher("t@x.com")).await.unwrap();
        let err = store.insert(teacher("t@x.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { key: "email" }));
    }

    #[tokio::test]
    async fn test_find_missing() {
        let store: MemoryIdentityStore<Student> = MemoryIdentityStore::new();
        assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
        assert!(store.find_by_email("nobody@x.com").await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_list_all_in_insertion_order() {
        let store: MemoryIdentityStore<Student> = MemoryIdentityStore::new();
        let first = store.insert(student("a@x.com", "P1")).await.unwrap();
        let second = store.insert(student("b@x.com", "P2")).await.unwrap();

        let all = store.list_all().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_duplicate_inserts_yield_one_success() {
        let store: Arc<MemoryIdentityStore<Student>> = Arc::new(MemoryIdentityStore::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .insert(student("race@x.com", &format!("P{}", i)))
                        .await
                })
            })
            .collect();

        let mut successes = 0;
        let mut duplicates = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(StoreError::Duplicate { key: "email" }) => duplicates += 1,
                Err(other) => panic!("unexpected error: {}", other),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(duplicates, 15);
        assert_eq!(store.len().await, 1);
    }
}
