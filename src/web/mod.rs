// Web server — Axum-based moderation API.
//
// One substantive route: POST /moderate. The CORS layer answers preflight
// requests itself (empty body, permissive headers), so no business logic
// runs for OPTIONS. /health exists for platform health checks.
//
// The moderator is optional in state on purpose: when the oracle credential
// is missing at startup the server still runs, but every moderation request
// resolves to the 500 configuration-error path instead of attempting a scan.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::oracle::gemini::GeminiOracle;
use crate::scan::Moderator;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// None when the oracle credential was absent at startup.
    pub moderator: Option<Arc<Moderator>>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: Config, port: u16, bind: &str) -> Result<()> {
    let moderator = if config.api_key.is_empty() {
        warn!("GOOGLE_API_KEY not set; every request will get a configuration error");
        None
    } else {
        let oracle = Arc::new(GeminiOracle::new(&config)?);
        Some(Arc::new(Moderator::new(oracle)?))
    };

    let app = build_router(AppState { moderator });

    let addr = format!("{bind}:{port}");
    info!("Palisade moderation API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the router. Public so the test suite can drive it directly.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/moderate", post(handlers::moderate::moderate))
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE])
                .max_age(Duration::from_secs(3600)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Platform health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
