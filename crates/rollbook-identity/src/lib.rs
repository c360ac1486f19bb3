//! # Rollbook Identity
//!
//! The operations every entry point performs on students and teachers:
//! registering a record, looking it up, and checking a password against it.
//! The HTTP server and the CLI both go through [`IdentityService`], so a
//! registration is validated, hashed and stored the same way whichever one
//! receives it.
//!
//! # Example
//!
//! ```ignore
//! use rollbook_db::MemoryIdentityStore;
//! use rollbook_identity::IdentityService;
//! use rollbook_models::Student;
//!
//! let store: MemoryIdentityStore<Student> = MemoryIdentityStore::new();
//! let student = IdentityService::register(&store, dto).await?;
//! ```

pub mod error;
pub mod password;
pub mod service;

pub use error::IdentityError;
pub use password::{hash_password, verify_password};
pub use service::IdentityService;
