use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::fs;
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_DIR: &str = "storage/logs";

/// Logs one line when a request arrives and one when it completes, at a
/// level chosen by the response status.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let request_id = uuid::Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        method = %method,
        path = %matched_path,
        "Incoming request"
    );

    let response = next.run(req).await;
    let latency_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    match status {
        400..=499 => warn!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status,
            latency_ms = %latency_ms,
            "Client error"
        ),
        500..=599 => error!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status,
            latency_ms = %latency_ms,
            "Server error"
        ),
        _ => info!(
            request_id = %request_id,
            method = %method,
            path = %matched_path,
            status,
            latency_ms = %latency_ms,
            "Request completed"
        ),
    }

    response
}

/// Installs the global subscriber: a compact console layer filtered by
/// `RUST_LOG`, plus daily-rotated error and JSON files under `storage/logs`.
///
/// If the log directory cannot be created the file layers are skipped and
/// only the console layer is installed.
pub fn init_tracing() {
    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=info,rollbook_db=info,tower_http=warn",
            env!("CARGO_CRATE_NAME")
        ))
    });

    let console_layer = fmt::layer()
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(console_filter);

    let (error_file_layer, json_file_layer) = match fs::create_dir_all(LOG_DIR) {
        Ok(()) => {
            let error_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, "rollbook.log");
            let error_layer = fmt::layer()
                .with_writer(error_appender)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_filter(EnvFilter::new("error"));

            // Structured logs for ingestion by a log shipper
            let json_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, "rollbook.json");
            let json_layer = fmt::layer()
                .json()
                .with_writer(json_appender)
                .with_current_span(true)
                .with_span_list(true)
                .with_filter(EnvFilter::new("info"));

            (Some(error_layer), Some(json_layer))
        }
        Err(err) => {
            eprintln!(
                "Failed to create log directory {}: {}. Logging to console only.",
                LOG_DIR, err
            );
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(error_file_layer)
        .with(json_file_layer)
        .init();
}
