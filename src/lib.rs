use axum::{Router, extract::FromRef, http::HeaderName};

use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

pub mod config;
pub mod handlers;
pub mod models;
pub mod pages;

// The static route table and the axum router built from it.
pub mod routes;
use routes::shell;

// --- Public Re-exports ---

pub use config::AppConfig;
pub use routes::shell::{ROUTES, resolve};

/// AppState
///
/// The single, immutable container shared by every request. The shell keeps
/// no per-request or per-session state; only the loaded configuration lives here.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles the shell's routes, registers the application state and wraps
/// everything in the request-id and tracing layers.
pub fn create_router(state: AppState) -> Router {
    let x_request_id = HeaderName::from_static("x-request-id");

    let base_router = Router::new().merge(shell::shell_routes()).with_state(state);

    base_router.layer(
        ServiceBuilder::new()
            // Generates a UUID for every incoming request.
            .layer(SetRequestIdLayer::new(
                x_request_id.clone(),
                MakeRequestUuid,
            ))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(trace_span_logger)
                    .on_response(
                        DefaultOnResponse::new()
                            .level(Level::INFO)
                            .latency_unit(tower_http::LatencyUnit::Millis),
                    ),
            )
            // Echoes x-request-id back to the client.
            .layer(PropagateRequestIdLayer::new(x_request_id)),
    )
}

/// trace_span_logger
///
/// Builds the per-request span so that every log line of one navigation is
/// correlated by its `x-request-id`.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
