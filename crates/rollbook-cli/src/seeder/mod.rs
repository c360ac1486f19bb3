//! Database seeding.
//!
//! Seeded records go through the same [`IdentityStore`] as API
//! registrations, so the email and PRN uniqueness rules hold for them too.
//! A record that collides with existing data is skipped, not fatal.

pub mod identities;
pub mod models;

use std::time::Instant;

use anyhow::Context;
use chrono::Utc;
use rollbook_core::hash_password;
use rollbook_db::{IdentityStore, StoreError};
use rollbook_models::{Identity, Student, StoredIdentity, Teacher};

pub use identities::{generate_students, generate_teachers, student_records, teacher_records};
pub use models::{DEFAULT_SEED_PASSWORD, SeedConfig, SeedReport};

/// Inserts `records` one at a time, counting duplicates instead of failing.
pub async fn insert_all<I: Identity>(
    store: &dyn IdentityStore<I>,
    records: Vec<StoredIdentity<I>>,
) -> anyhow::Result<SeedReport> {
    let mut report = SeedReport::default();

    for record in records {
        match store.insert(record).await {
            Ok(_) => report.inserted += 1,
            Err(StoreError::Duplicate { .. }) => report.skipped += 1,
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to insert seeded {}", I::ROLE.as_str().to_lowercase())
                });
            }
        }
    }

    Ok(report)
}

/// Seeds `config.students` students and `config.teachers` teachers.
pub async fn seed_all<S>(store: &S, config: SeedConfig) -> anyhow::Result<(SeedReport, SeedReport)>
where
    S: IdentityStore<Student> + IdentityStore<Teacher>,
{
    let start_time = Instant::now();
    let batch = Utc::now().format("%y%m%d%H%M%S").to_string();

    println!(
        "🌱 Seeding {} students and {} teachers...",
        config.students, config.teachers
    );

    let password_hash = hash_password(&config.password)?;

    let students = student_records(&batch, config.students, &config.password, &password_hash);
    let student_report = insert_all::<Student>(store, students).await?;
    println!(
        "   ✓ Students: {} inserted, {} skipped",
        student_report.inserted, student_report.skipped
    );

    let teachers = teacher_records(&batch, config.teachers, &config.password, &password_hash);
    let teacher_report = insert_all::<Teacher>(store, teachers).await?;
    println!(
        "   ✓ Teachers: {} inserted, {} skipped",
        teacher_report.inserted, teacher_report.skipped
    );

    println!(
        "✅ Seeding complete in {:?}. Seeded accounts use the password '{}'",
        start_time.elapsed(),
        config.password
    );

    Ok((student_report, teacher_report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollbook_db::MemoryIdentityStore;

    #[tokio::test]
    async fn test_insert_all_skips_duplicates() {
        let store: MemoryIdentityStore<Student> = MemoryIdentityStore::new();
        let records = student_records("dup", 3, "pw", "$2b$10$hash");

        let first = insert_all::<Student>(&store, records.clone()).await.unwrap();
        assert_eq!(first, SeedReport { inserted: 3, skipped: 0 });

        let second = insert_all::<Student>(&store, records).await.unwrap();
        assert_eq!(second, SeedReport { inserted: 0, skipped: 3 });
        assert_eq!(store.len().await, 3);
    }
}
