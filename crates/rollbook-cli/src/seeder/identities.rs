//! Fake student and teacher generation.
//!
//! Records are generated in parallel with rayon. Every record in a batch
//! shares one password hash, computed once by the caller, since bcrypt at
//! the production cost would otherwise dominate seeding time.

use chrono::Utc;
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rayon::prelude::*;
use rollbook_models::{
    RegisterStudentDto, RegisterTeacherDto, Registration, Student, StoredIdentity, Teacher,
};
use uuid::Uuid;

use super::models::{DEPARTMENTS, DESIGNATIONS, DIVISIONS};

struct FakePerson {
    name: String,
    email_local: String,
}

fn fake_person() -> FakePerson {
    let first: String = FirstName().fake();
    let last: String = LastName().fake();

    let email_local = format!("{}.{}", ascii_lower(&first), ascii_lower(&last));

    FakePerson {
        name: format!("{} {}", first, last),
        email_local,
    }
}

// Fake names can carry apostrophes and spaces that do not belong in an email.
fn ascii_lower(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Student registrations whose email and PRN are unique within `batch`.
pub fn generate_students(batch: &str, count: usize, password: &str) -> Vec<RegisterStudentDto> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let person = fake_person();
            RegisterStudentDto {
                name: person.name,
                prn: format!("PRN{}{:05}", batch, idx),
                department: DEPARTMENTS[idx % DEPARTMENTS.len()].to_string(),
                division: DIVISIONS[idx % DIVISIONS.len()].to_string(),
                email: format!("{}+s{}{}@example.com", person.email_local, batch, idx),
                password: password.to_string(),
            }
        })
        .collect()
}

/// Teacher registrations whose email is unique within `batch`.
pub fn generate_teachers(batch: &str, count: usize, password: &str) -> Vec<RegisterTeacherDto> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let person = fake_person();
            RegisterTeacherDto {
                name: person.name,
                email: format!("{}+t{}{}@example.com", person.email_local, batch, idx),
                department: DEPARTMENTS[idx % DEPARTMENTS.len()].to_string(),
                designation: Some(DESIGNATIONS[idx % DESIGNATIONS.len()].to_string()),
                password: password.to_string(),
            }
        })
        .collect()
}

/// Turns registrations into store records sharing `password_hash`.
pub fn into_records<R>(dtos: Vec<R>, password_hash: &str) -> Vec<StoredIdentity<R::Identity>>
where
    R: Registration,
{
    let created_at = Utc::now();
    dtos.into_iter()
        .map(|dto| {
            StoredIdentity::new(
                dto.into_identity(Uuid::new_v4(), created_at),
                password_hash.to_string(),
            )
        })
        .collect()
}

pub fn student_records(
    batch: &str,
    count: usize,
    password: &str,
    password_hash: &str,
) -> Vec<StoredIdentity<Student>> {
    into_records(generate_students(batch, count, password), password_hash)
}

pub fn teacher_records(
    batch: &str,
    count: usize,
    password: &str,
    password_hash: &str,
) -> Vec<StoredIdentity<Teacher>> {
    into_records(generate_teachers(batch, count, password), password_hash)
}
