use chrono::{DateTime, Duration, Utc};
use rollbook_db::{IdentityStore, PgIdentityStore, StoreError};
use rollbook_models::{
    Registration, RegisterStudentDto, RegisterTeacherDto, Student, StoredIdentity, Teacher,
};
use sqlx::PgPool;
use uuid::Uuid;

fn student_at(email: &str, prn: &str, created_at: DateTime<Utc>) -> StoredIdentity<Student> {
    let dto = RegisterStudentDto {
        name: "A".to_string(),
        prn: prn.to_string(),
        department: "CS".to_string(),
        division: "A".to_string(),
        email: email.to_string(),
        password: "pw1".to_string(),
    };
    StoredIdentity::new(
        dto.into_identity(Uuid::new_v4(), created_at),
        "$2b$10$studenthash".to_string(),
    )
}

fn student(email: &str, prn: &str) -> StoredIdentity<Student> {
    student_at(email, prn, Utc::now())
}

fn teacher(email: &str) -> StoredIdentity<Teacher> {
    let dto = RegisterTeacherDto {
        name: "T".to_string(),
        email: email.to_string(),
        department: "CS".to_string(),
        designation: Some("Professor".to_string()),
        password: "pw".to_string(),
    };
    StoredIdentity::new(
        dto.into_identity(Uuid::new_v4(), Utc::now()),
        "$2b$10$teacherhash".to_string(),
    )
}

async fn count(pool: &PgPool, table: &str, collection: &str) -> i64 {
    sqlx::query_scalar(&format!(
        "SELECT COUNT(*) FROM {} WHERE collection = $1",
        table
    ))
    .bind(collection)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_insert_and_lookup_round_trip(pool: PgPool) {
    let store = PgIdentityStore::new(pool);

    let inserted: Student = store.insert(student("a@x.com", "P1")).await.unwrap();

    let by_id: Student = store.find_by_id(inserted.id).await.unwrap().unwrap();
    assert_eq!(by_id, inserted);

    let by_email: StoredIdentity<Student> =
        store.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(by_email.identity, inserted);
    assert_eq!(by_email.password_hash, "$2b$10$studenthash");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_email_rejected(pool: PgPool) {
    let store = PgIdentityStore::new(pool.clone());
    IdentityStore::<Student>::insert(&store, student("a@x.com", "P1"))
        .await
        .unwrap();

    let err = IdentityStore::<Student>::insert(&store, student("a@x.com", "P2"))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Duplicate { key: "email" }));
    assert_eq!(count(&pool, "identities", "students").await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_prn_rolls_back_whole_record(pool: PgPool) {
    let store = PgIdentityStore::new(pool.clone());
    IdentityStore::<Student>::insert(&store, student("a@x.com", "P1"))
        .await
        .unwrap();

    let err = IdentityStore::<Student>::insert(&store, student("b@x.com", "P1"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Duplicate { key: "prn" }));

    assert_eq!(count(&pool, "identities", "students").await, 1);
    assert_eq!(count(&pool, "identity_keys", "students").await, 2);

    // The rejected record's email was released with the rollback.
    let missing: Option<StoredIdentity<Student>> = store.find_by_email("b@x.com").await.unwrap();
    assert!(missing.is_none());
    IdentityStore::<Student>::insert(&store, student("b@x.com", "P2"))
        .await
        .unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn test_same_email_in_both_collections(pool: PgPool) {
    let store = PgIdentityStore::new(pool);

    let s: Student = store.insert(student("shared@x.com", "P1")).await.unwrap();
    let t: Teacher = store.insert(teacher("shared@x.com")).await.unwrap();

    let found_student: StoredIdentity<Student> =
        store.find_by_email("shared@x.com").await.unwrap().unwrap();
    let found_teacher: StoredIdentity<Teacher> =
        store.find_by_email("shared@x.com").await.unwrap().unwrap();
    assert_eq!(found_student.identity, s);
    assert_eq!(found_teacher.identity, t);

    // Ids do not leak across collections.
    let crossed: Option<Teacher> = store.find_by_id(s.id).await.unwrap();
    assert!(crossed.is_none());

    let teachers: Vec<Teacher> = store.list_all().await.unwrap();
    assert_eq!(teachers, vec![t]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_all_orders_by_creation_time(pool: PgPool) {
    let store = PgIdentityStore::new(pool);
    let now = Utc::now();

    let later: Student = store
        .insert(student_at("late@x.com", "P2", now))
        .await
        .unwrap();
    let earlier: Student = store
        .insert(student_at("early@x.com", "P1", now - Duration::minutes(5)))
        .await
        .unwrap();

    let all: Vec<Student> = store.list_all().await.unwrap();
    assert_eq!(all, vec![earlier, later]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_concurrent_duplicate_inserts_yield_one_success(pool: PgPool) {
    let store = PgIdentityStore::new(pool.clone());

    let handles: Vec<_> = (0..5)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                IdentityStore::<Student>::insert(&store, student("race@x.com", &format!("P{}", i)))
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
    assert_eq!(duplicates, 4);
    assert_eq!(count(&pool, "identities", "students").await, 1);
}
