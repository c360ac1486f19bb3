use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rollbook_core::errors::ErrorResponse;
use rollbook_core::{AppError, DataResponse, ListResponse};
use rollbook_identity::IdentityService;
use rollbook_models::{RegisterStudentDto, Role, Student};
use tracing::instrument;

use crate::metrics::track_identity_registered;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new student
#[utoipa::path(
    post,
    path = "/api/student/register",
    request_body = RegisterStudentDto,
    responses(
        (status = 201, description = "Student registered successfully", body = DataResponse<Student>),
        (status = 400, description = "Bad request - missing field, or email/PRN already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip_all)]
pub async fn register_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterStudentDto>,
) -> Result<(StatusCode, Json<DataResponse<Student>>), AppError> {
    let student = IdentityService::register(state.students.as_ref(), dto).await?;
    track_identity_registered(Role::Student);

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::with_message(
            "Student registered successfully",
            student,
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "All registered students", body = ListResponse<Student>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip_all)]
pub async fn get_students(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<Student>>, AppError> {
    let students = IdentityService::list_all(state.students.as_ref()).await?;
    Ok(Json(ListResponse::new(students)))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(
        ("id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student found", body = DataResponse<Student>),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<Student>>, AppError> {
    let student = IdentityService::find_by_raw_id(state.students.as_ref(), &id).await?;
    Ok(Json(DataResponse::new(student)))
}

#[utoipa::path(
    get,
    path = "/api/students/email/{email}",
    params(
        ("email" = String, Path, description = "Student email address")
    ),
    responses(
        (status = 200, description = "Student found", body = DataResponse<Student>),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<DataResponse<Student>>, AppError> {
    let student = IdentityService::find_by_email(state.students.as_ref(), &email).await?;
    Ok(Json(DataResponse::new(student)))
}
