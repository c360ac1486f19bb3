use rollbook_db::IdentityStore;
use rollbook_identity::{IdentityError, IdentityService, verify_password};
use rollbook_models::{AuthenticatedIdentity, Identity, LoginRequest, Role};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::metrics::{track_login_failure, track_login_success};
use crate::state::AppState;

/// Role-dispatched login.
pub struct CredentialService;

impl CredentialService {
    #[instrument(skip_all, fields(email = %request.email, role = %request.role))]
    pub async fn login(
        state: &AppState,
        request: LoginRequest,
    ) -> Result<AuthenticatedIdentity, IdentityError> {
        request
            .validate()
            .map_err(|errors| IdentityError::from_validation(&errors))?;

        let role: Role = match request.role.parse() {
            Ok(role) => role,
            Err(_) => {
                track_login_failure(None, "invalid_role");
                return Err(IdentityError::InvalidRole(request.role));
            }
        };

        let result = match role {
            Role::Student => {
                Self::authenticate(state.students.as_ref(), &request.email, &request.password)
                    .await
                    .map(AuthenticatedIdentity::from)
            }
            Role::Teacher => {
                Self::authenticate(state.teachers.as_ref(), &request.email, &request.password)
                    .await
                    .map(AuthenticatedIdentity::from)
            }
        };

        match &result {
            Ok(_) => {
                track_login_success(role);
                info!("Login successful");
            }
            Err(err) => {
                track_login_failure(Some(role), err.kind());
                warn!(reason = err.kind(), "Login failed");
            }
        }

        result
    }

    async fn authenticate<I: Identity>(
        store: &dyn IdentityStore<I>,
        email: &str,
        password: &str,
    ) -> Result<I, IdentityError> {
        let stored = IdentityService::find_credentials(store, email).await?;

        if !verify_password(password, &stored.password_hash).await? {
            return Err(IdentityError::InvalidCredentials);
        }

        Ok(stored.into_identity())
    }
}
