//! The one place the HTTP stack is assembled.
//!
//! `main.rs` and the integration tests both call [`build_app_router`], so a
//! test request passes through exactly the layers a production request does.

use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePath;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// The complete application service handed to `axum::serve`.
///
/// Trailing-slash trimming wraps the router itself, so `/brands/` is matched
/// as `/brands`.
pub type App = NormalizePath<Router>;

/// Build the storefront [`App`]: resource and health routes wrapped in the
/// middleware stack.
///
/// Layers, outermost first:
///
/// 1. Trim a trailing slash from the path
/// 2. CORS
/// 3. Assign an `x-request-id` (UUID) unless the client sent one
/// 4. Request span carrying method, path and request id
/// 5. Copy the request id onto the response
/// 6. Timeout, answered with 408
/// 7. Panic recovery, answered with 500
pub fn build_app_router(state: AppState, config: &ServerConfig) -> App {
    let timeout = Duration::from_secs(config.request_timeout_secs);

    let router = Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
        .layer(trace_layer())
        .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
        .layer(build_cors_layer(config))
        .with_state(state);

    NormalizePath::trim_trailing_slash(router)
}

type RequestSpan = fn(&Request<Body>) -> Span;

fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(request_span as RequestSpan)
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id,
    )
}

/// CORS for the configured storefront origins.
///
/// Origins were validated when the configuration was loaded.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(config.cors_origins.clone())
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
