use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use rollbook::router::init_router;
use rollbook::state::AppState;
use rollbook_config::CorsConfig;
use serde_json::{Value, json};
use tower::ServiceExt;

/// App over fresh in-memory stores. The state is returned too so tests can
/// inspect what was persisted.
pub fn setup_test_app() -> (Router, AppState) {
    let state = AppState::in_memory(CorsConfig::default());
    (init_router(state.clone()), state)
}

#[allow(dead_code)]
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, body)
}

#[allow(dead_code)]
pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

#[allow(dead_code)]
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

#[allow(dead_code)]
pub fn student_payload(email: &str, prn: &str) -> Value {
    json!({
        "name": "A",
        "prn": prn,
        "department": "CS",
        "division": "A",
        "email": email,
        "password": "pw1"
    })
}

#[allow(dead_code)]
pub fn teacher_payload(email: &str) -> Value {
    json!({
        "name": "T",
        "email": email,
        "department": "CS",
        "designation": "Professor",
        "password": "pw"
    })
}

#[allow(dead_code)]
pub async fn register_student(app: &Router, email: &str, prn: &str) -> Value {
    let (status, body) = post_json(app, "/api/student/register", student_payload(email, prn)).await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["data"].clone()
}

#[allow(dead_code)]
pub async fn register_teacher(app: &Router, email: &str) -> Value {
    let (status, body) = post_json(app, "/api/teacher/register", teacher_payload(email)).await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["data"].clone()
}
