//! # Rollbook Core
//!
//! Core types, errors, and utilities for the Rollbook API.
//!
//! This crate provides foundational types used throughout the Rollbook application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: Salted bcrypt password hashing and verification
//! - [`response`]: The `{ success, ... }` JSON envelopes every endpoint returns
//!
//! # Example
//!
//! ```ignore
//! use rollbook_core::errors::AppError;
//! use rollbook_core::password::{hash_password, verify_password};
//!
//! // Create an error
//! let error = AppError::not_found(anyhow::anyhow!("Student not found"));
//!
//! // Hash a password
//! let hash = hash_password("secure_password")?;
//! assert!(verify_password("secure_password", &hash)?);
//! ```

pub mod errors;
pub mod password;
pub mod response;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{hash_password, verify_password};
pub use response::{DataResponse, ListResponse, MessageResponse};
