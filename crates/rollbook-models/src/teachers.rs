//! Teacher record and registration DTO.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::identity::{Identity, Registration, Role, UniqueKey, normalize_email};

/// A registered teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Teacher {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl Identity for Teacher {
    const ROLE: Role = Role::Teacher;

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
        vec![UniqueKey::new("email", &self.email)]
    }
}

/// Request body for `POST /api/teacher/register`.
#[derive(Deserialize, Debug, Clone, ToSchema, Validate)]
pub struct RegisterTeacherDto {
    #[validate(
        custom(function = "crate::validation::non_blank"),
        length(max = 100, message = "name must be at most 100 characters")
    )]
    pub name: String,
    #[validate(
        custom(function = "crate::validation::non_blank"),
        email(message = "email must be a valid email address")
    )]
    pub email: String,
    #[validate(
        custom(function = "crate::validation::non_blank"),
        length(max = 100, message = "department must be at most 100 characters")
    )]
    pub department: String,
    #[validate(length(max = 100, message = "designation must be at most 100 characters"))]
    pub designation: Option<String>,
    #[validate(custom(function = "crate::validation::non_blank"))]
    pub password: String,
}

impl Registration for RegisterTeacherDto {
    type Identity = Teacher;

    fn password(&self) -> &str {
        &self.password
    }

    fn into_identity(self, id: Uuid, created_at: DateTime<Utc>) -> Teacher {
        Teacher {
            id,
            name: self.name.trim().to_string(),
            email: normalize_email(&self.email),
            department: self.department.trim().to_string(),
            designation: self
                .designation
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            role: Role::Teacher,
            created_at,
        }
    }
}
