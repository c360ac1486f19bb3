//! Login request and response.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::identity::Role;
use crate::students::Student;
use crate::teachers::Teacher;

/// Request body for `POST /api/login`.
///
/// `role` stays a string here so an unknown role is reported as an invalid
/// role rather than a malformed body.
#[derive(Deserialize, Clone, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "crate::validation::non_blank"))]
    pub email: String,
    #[validate(custom(function = "crate::validation::non_blank"))]
    pub password: String,
    /// `"Student"` or `"Teacher"`.
    #[validate(custom(function = "crate::validation::non_blank"))]
    pub role: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// The authenticated identity, serialized as the bare record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum AuthenticatedIdentity {
    Student(Student),
    Teacher(Teacher),
}

impl AuthenticatedIdentity {
    pub fn role(&self) -> Role {
        match self {
            Self::Student(_) => Role::Student,
            Self::Teacher(_) => Role::Teacher,
        }
    }
}

impl From<Student> for AuthenticatedIdentity {
    fn from(student: Student) -> Self {
        Self::Student(student)
    }
}

impl From<Teacher> for AuthenticatedIdentity {
    fn from(teacher: Teacher) -> Self {
        Self::Teacher(teacher)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: AuthenticatedIdentity,
}
