//! Student record and registration DTO.
//!
//! Students are unique by email and by PRN (permanent registration number)
//! within the student collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::identity::{Identity, Registration, Role, UniqueKey, normalize_email};

/// A registered student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub prn: String,
    pub department: String,
    pub division: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl Identity for Student {
    const ROLE: Role = Role::Student;

    fn id(&self) -> Uuid {
        self.id
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn unique_keys(&self) -> Vec<UniqueKey<'_>> {
        vec![
            UniqueKey::new("email", &self.email),
            UniqueKey::new("prn", &self.prn),
        ]
    }
}

/// Request body for `POST /api/student/register`.
#[derive(Deserialize, Debug, Clone, ToSchema, Validate)]
pub struct RegisterStudentDto {
    #[validate(
        custom(function = "crate::validation::non_blank"),
        length(max = 100, message = "name must be at most 100 characters")
    )]
    pub name: String,
    #[validate(
        custom(function = "crate::validation::non_blank"),
        length(max = 50, message = "prn must be at most 50 characters")
    )]
    pub prn: String,
    #[validate(
        custom(function = "crate::validation::non_blank"),
        length(max = 100, message = "department must be at most 100 characters")
    )]
    pub department: String,
    #[validate(
        custom(function = "crate::validation::non_blank"),
        length(max = 50, message = "division must be at most 50 characters")
    )]
    pub division: String,
    #[validate(
        custom(function = "crate::validation::non_blank"),
        email(message = "email must be a valid email address")
    )]
    pub email: String,
    #[validate(custom(function = "crate::validation::non_blank"))]
    pub password: String,
}

impl Registration for RegisterStudentDto {
    type Identity = Student;

    fn password(&self) -> &str {
        &self.password
    }

    fn into_identity(self, id: Uuid, created_at: DateTime<Utc>) -> Student {
        Student {
            id,
            name: self.name.trim().to_string(),
            prn: self.prn.trim().to_string(),
            department: self.department.trim().to_string(),
            division: self.division.trim().to_string(),
            email: normalize_email(&self.email),
            role: Role::Student,
            created_at,
        }
    }
}
