use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rollbook_core::errors::ErrorResponse;
use rollbook_core::{AppError, DataResponse, ListResponse};
use rollbook_identity::IdentityService;
use rollbook_models::{RegisterTeacherDto, Role, Teacher};
use tracing::instrument;

use crate::metrics::track_identity_registered;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new teacher
#[utoipa::path(
    post,
    path = "/api/teacher/register",
    request_body = RegisterTeacherDto,
    responses(
        (status = 201, description = "Teacher registered successfully", body = DataResponse<Teacher>),
        (status = 400, description = "Bad request - missing field or email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip_all)]
pub async fn register_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterTeacherDto>,
) -> Result<(StatusCode, Json<DataResponse<Teacher>>), AppError> {
    let teacher = IdentityService::register(state.teachers.as_ref(), dto).await?;
    track_identity_registered(Role::Teacher);

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::with_message(
            "Teacher registered successfully",
            teacher,
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/teachers",
    responses(
        (status = 200, description = "All registered teachers", body = ListResponse<Teacher>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip_all)]
pub async fn get_teachers(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<Teacher>>, AppError> {
    let teachers = IdentityService::list_all(state.teachers.as_ref()).await?;
    Ok(Json(ListResponse::new(teachers)))
}

#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    params(
        ("id" = String, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher found", body = DataResponse<Teacher>),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<Teacher>>, AppError> {
    let teacher = IdentityService::find_by_raw_id(state.teachers.as_ref(), &id).await?;
    Ok(Json(DataResponse::new(teacher)))
}
