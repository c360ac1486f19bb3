use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{get_teacher, get_teachers, register_teacher};
use crate::state::AppState;

pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/teacher/register", post(register_teacher))
        .route("/teachers", get(get_teachers))
        .route("/teachers/{id}", get(get_teacher))
}
