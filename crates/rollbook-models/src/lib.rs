//! # Rollbook Models
//!
//! Domain models and DTOs for the Rollbook API.
//!
//! Students and teachers are two kinds of the same thing: an identity record
//! with a fixed role, a set of natural keys that must be unique within its
//! collection, and a password hash that never leaves the store. The
//! [`identity`] module captures that once; [`students`] and [`teachers`]
//! only describe their fields.
//!
//! # Modules
//!
//! - [`auth`]: Login request/response
//! - [`identity`]: [`Role`], the [`Identity`] and [`Registration`] traits, [`StoredIdentity`]
//! - [`students`]: Student record and registration DTO
//! - [`teachers`]: Teacher record and registration DTO
//! - [`validation`]: Shared field validators
//!
//! # Example
//!
//! ```ignore
//! use rollbook_models::{Identity, Role, Student};
//!
//! assert_eq!(Student::ROLE, Role::Student);
//! assert_eq!(Role::Student.collection(), "students");
//! ```

pub mod auth;
pub mod identity;
pub mod students;
pub mod teachers;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use auth::{AuthenticatedIdentity, LoginRequest, LoginResponse};
pub use identity::{
    Identity, Registration, Role, StoredIdentity, UniqueKey, UnknownRole, normalize_email,
};
pub use students::{RegisterStudentDto, Student};
pub use teachers::{RegisterTeacherDto, Teacher};
