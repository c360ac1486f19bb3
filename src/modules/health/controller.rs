use axum::Json;
use rollbook_core::MessageResponse;

/// Liveness probe. Does not touch the store.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Server is up", body = MessageResponse)
    ),
    tag = "Health"
)]
pub async fn health() -> Json<MessageResponse> {
    Json(MessageResponse::ok("Server is healthy"))
}
