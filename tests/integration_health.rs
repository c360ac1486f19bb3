mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{get, send, setup_test_app};
use rollbook::router::init_router;
use rollbook::state::AppState;
use rollbook_config::CorsConfig;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let (app, _) = setup_test_app();

    let (status, body) = get(&app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Server is healthy");
}

#[tokio::test]
async fn test_unknown_route_uses_failure_envelope() {
    let (app, _) = setup_test_app();

    for uri in ["/api/nope", "/nothing/here"] {
        let (status, body) = get(&app, uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Route not found");
    }
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (app, _) = setup_test_app();

    let (status, body) = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/login"].is_object());
}

#[tokio::test]
async fn test_wrong_method_uses_failure_envelope() {
    let (app, _) = setup_test_app();

    for (method, uri) in [("GET", "/api/login"), ("DELETE", "/api/students")] {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{} {}", method, uri);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Method not allowed");
    }
}

#[tokio::test]
async fn test_wildcard_origin_allows_any_site() {
    let state = AppState::in_memory(CorsConfig {
        allowed_origins: vec!["*".to_string()],
    });
    let app = init_router(state);

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/login")
        .header(header::ORIGIN, "https://portal.example.edu")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .is_none()
    );
}
