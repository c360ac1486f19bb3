//! The generic identity abstraction.
//!
//! An identity kind is described by:
//!
//! - a public record type implementing [`Identity`] (no password field, so a
//!   record can be serialized into any response as-is),
//! - a registration DTO implementing [`Registration`] that validates input and
//!   turns it into the record,
//! - the natural keys returned by [`Identity::unique_keys`], which the store
//!   keeps unique within the kind's collection.
//!
//! The password hash only exists inside [`StoredIdentity`], which the store
//! hands back for credential checks.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// The two identity kinds. Serialized exactly as `"Student"` / `"Teacher"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Student, Role::Teacher];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
        }
    }

    /// Name of the collection holding records of this kind.
    pub fn collection(&self) -> &'static str {
        match self {
            Role::Student => "students",
            Role::Teacher => "teachers",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    /// Role names are matched exactly; `"student"` is not a role.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// A natural key that must be unique within a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniqueKey<'a> {
    pub name: &'static str,
    pub value: &'a str,
}

impl<'a> UniqueKey<'a> {
    pub fn new(name: &'static str, value: &'a str) -> Self {
        Self { name, value }
    }
}

/// A persisted identity record as it appears in responses.
pub trait Identity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const ROLE: Role;

    fn id(&self) -> Uuid;

    fn email(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;

    /// Keys the store must keep unique, always including `email`.
    fn unique_keys(&self) -> Vec<UniqueKey<'_>>;
}

/// A validated registration payload for one identity kind.
pub trait Registration: Validate + Send + 'static {
    type Identity: Identity;

    fn password(&self) -> &str;

    /// Builds the record. Text fields are trimmed and the email normalized.
    fn into_identity(self, id: Uuid, created_at: DateTime<Utc>) -> Self::Identity;
}

/// An identity together with its password hash, as held by the store.
#[derive(Clone, PartialEq, Eq)]
pub struct StoredIdentity<I> {
    pub identity: I,
    pub password_hash: String,
}

impl<I> StoredIdentity<I> {
    pub fn new(identity: I, password_hash: String) -> Self {
        Self {
            identity,
            password_hash,
        }
    }

    pub fn into_identity(self) -> I {
        self.identity
    }
}

impl<I: fmt::Debug> fmt::Debug for StoredIdentity<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredIdentity")
            .field("identity", &self.identity)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Emails compare case-insensitively and ignore surrounding whitespace.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
