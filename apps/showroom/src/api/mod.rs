//! # HTTP API
//!
//! axum server for the showroom site.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Rendered page |
//! | GET | `/health` | Liveness check |
//! | GET | `/regions` | Declared reveal regions and options |
//! | POST | `/reveal/replay` | Replay a scroll trace through the observer |
//!
//! The page is rendered once when the state is built and shared read-only.
//! Replay requests build their own observer, so nothing mutable is shared
//! between requests.

use crate::config::SiteConfig;
use crate::error::AppError;
use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use showroom_core::content::SiteContent;
use showroom_core::render::render_page;
use showroom_core::trace::{replay, ReplayReport, ScrollTrace};
use showroom_core::{Page, RegionId};
use std::collections::BTreeSet;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

// =============================================================================
// STATE
// =============================================================================

/// Shared, read-only server state.
#[derive(Clone)]
pub struct AppState {
    config: Arc<SiteConfig>,
    page: Arc<Page>,
    html: Bytes,
}

impl AppState {
    /// Compose and render the page for `config`.
    pub fn new(config: SiteConfig) -> Self {
        let page = Page::compose(config.page_config());
        let html = render_page(&page, SiteContent::kharisma(), &BTreeSet::new());
        Self {
            config: Arc::new(config),
            page: Arc::new(page),
            html: Bytes::from(html),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionsResponse {
    pub regions: Vec<RegionId>,
    pub threshold: String,
    pub margin: String,
    pub class: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Handler error rendered as `{"error": ...}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

/// Malformed or mistyped request bodies get the same JSON error shape.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// Build the router with tracing, plus permissive CORS when enabled.
pub fn create_router(state: AppState) -> Router {
    let cors = state.config.server.cors;

    let router = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/regions", get(regions))
        .route("/reveal/replay", post(replay_trace))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: SiteConfig) -> Result<(), AppError> {
    let addr = config.socket_addr()?;
    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Showroom listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Showroom stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

async fn index(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.html.clone())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn regions(State(state): State<AppState>) -> Json<RegionsResponse> {
    let config = state.page.config();
    Json(RegionsResponse {
        regions: state.page.reveal_regions(),
        threshold: config.reveal.threshold.to_string(),
        margin: config.reveal.margin.to_string(),
        class: config.reveal_class.clone(),
    })
}

async fn replay_trace(
    State(state): State<AppState>,
    payload: Result<Json<ScrollTrace>, JsonRejection>,
) -> Result<Json<ReplayReport>, ApiError> {
    let Json(trace) = payload?;
    debug!(
        regions = trace.regions.len(),
        steps = trace.steps.len(),
        primitive = trace.primitive,
        "Replaying scroll trace"
    );

    let report = replay(&trace, state.config.reveal_options())
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    for event in &report.events {
        debug!(step = event.step, region = %event.region, "Region revealed");
    }
    debug!(
        steps = report.steps,
        revealed = report.revealed.len(),
        pending = report.pending.len(),
        "Replayed scroll trace"
    );
    Ok(Json(report))
}
