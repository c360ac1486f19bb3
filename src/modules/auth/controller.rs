use axum::Json;
use axum::extract::State;
use rollbook_core::AppError;
use rollbook_core::errors::ErrorResponse;
use rollbook_models::{LoginRequest, LoginResponse};
use tracing::instrument;

use super::service::CredentialService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Log in as a student or teacher
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Bad request - missing field or invalid role", body = ErrorResponse),
        (status = 401, description = "Incorrect password", body = ErrorResponse),
        (status = 404, description = "No account with this email for the role", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = CredentialService::login(&state, request).await?;

    Ok(Json(LoginResponse {
        success: true,
        message: format!("{} logged in successfully", user.role()),
        user,
    }))
}
