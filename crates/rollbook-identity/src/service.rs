use chrono::Utc;
use rollbook_db::IdentityStore;
use rollbook_models::{Identity, Registration, StoredIdentity, normalize_email};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::error::IdentityError;
use crate::password::hash_password;

/// Registration and lookup for any identity kind.
///
/// Every operation takes the store for the kind it works on, so the same code
/// serves students and teachers.
pub struct IdentityService;

impl IdentityService {
    #[instrument(skip_all)]
    pub async fn register<R: Registration>(
        store: &dyn IdentityStore<R::Identity>,
        dto: R,
    ) -> Result<R::Identity, IdentityError> {
        let role = <R::Identity as Identity>::ROLE;

        dto.validate()
            .map_err(|errors| IdentityError::from_validation(&errors))?;

        let password = dto.password().to_string();
        let password_hash = hash_password(&password).await?;
        let identity = dto.into_identity(Uuid::new_v4(), Utc::now());

        let created = store
            .insert(StoredIdentity::new(identity, password_hash))
            .await
            .map_err(|err| IdentityError::from_store(role, err))?;

        info!(role = %role, id = %created.id(), "Identity registered");

        Ok(created)
    }

    pub async fn list_all<I: Identity>(
        store: &dyn IdentityStore<I>,
    ) -> Result<Vec<I>, IdentityError> {
        store
            .list_all()
            .await
            .map_err(|err| IdentityError::from_store(I::ROLE, err))
    }

    pub async fn find_by_id<I: Identity>(
        store: &dyn IdentityStore<I>,
        id: Uuid,
    ) -> Result<I, IdentityError> {
        store
            .find_by_id(id)
            .await
            .map_err(|err| IdentityError::from_store(I::ROLE, err))?
            .ok_or(IdentityError::NotFound { role: I::ROLE })
    }

    /// Path ids that are not valid UUIDs cannot name a record, so they are
    /// reported as not found rather than as a bad request.
    pub async fn find_by_raw_id<I: Identity>(
        store: &dyn IdentityStore<I>,
        raw_id: &str,
    ) -> Result<I, IdentityError> {
        let id = Uuid::parse_str(raw_id).map_err(|_| IdentityError::NotFound { role: I::ROLE })?;
        Self::find_by_id(store, id).await
    }

    pub async fn find_by_email<I: Identity>(
        store: &dyn IdentityStore<I>,
        email: &str,
    ) -> Result<I, IdentityError> {
        Self::find_credentials(store, email)
            .await
            .map(StoredIdentity::into_identity)
    }

    /// The record together with its password hash. Only credential checks use
    /// this; responses are always built from the bare identity.
    pub async fn find_credentials<I: Identity>(
        store: &dyn IdentityStore<I>,
        email: &str,
    ) -> Result<StoredIdentity<I>, IdentityError> {
        let email = normalize_email(email);

        store
            .find_by_email(&email)
            .await
            .map_err(|err| IdentityError::from_store(I::ROLE, err))?
            .ok_or(IdentityError::NotFound { role: I::ROLE })
    }
}
