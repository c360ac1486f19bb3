//! Password hashing.
//!
//! Passwords are stored as bcrypt hashes. Each call to [`hash_password`]
//! draws a fresh random salt, so two hashes of the same plaintext differ;
//! [`verify_password`] relies on bcrypt's own comparison.

use anyhow::Context;
use bcrypt::{hash, verify};

/// bcrypt work factor applied to every stored password.
pub const PASSWORD_HASH_COST: u32 = 10;

pub fn hash_password(password: &str) -> anyhow::Result<String> {
    hash(password, PASSWORD_HASH_COST).context("Failed to hash password")
}

/// Returns `Ok(false)` on mismatch. A stored value that is not a bcrypt hash
/// is an error, not a mismatch.
pub fn verify_password(password: &str, hash: &str) -> anyhow::Result<bool> {
    verify(password, hash).context("Failed to verify password")
}
