//! bcrypt is CPU-bound, so both operations run on the blocking pool.

use anyhow::Context;

use crate::error::IdentityError;

pub async fn hash_password(plain: &str) -> Result<String, IdentityError> {
    let plain = plain.to_owned();
    let hash = tokio::task::spawn_blocking(move || rollbook_core::hash_password(&plain))
        .await
        .context("Password hashing task failed")??;
    Ok(hash)
}

pub async fn verify_password(plain: &str, hash: &str) -> Result<bool, IdentityError> {
    let (plain, hash) = (plain.to_owned(), hash.to_owned());
    let matches = tokio::task::spawn_blocking(move || rollbook_core::verify_password(&plain, &hash))
        .await
        .context("Password verification task failed")??;
    Ok(matches)
}
