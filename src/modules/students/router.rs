use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{get_student, get_student_by_email, get_students, register_student};
use crate::state::AppState;

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/student/register", post(register_student))
        .route("/students", get(get_students))
        .route("/students/{id}", get(get_student))
        .route("/students/email/{email}", get(get_student_by_email))
}
