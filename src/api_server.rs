// Axum API Server Module
//
// Purpose: JSON API around the fit advisor pipeline
// Endpoints: GET / (banner), GET /health, POST /fit

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::advisor::{advise, FitReport};
use crate::config::ServerConfig;
use crate::request::{FitRequest, ValidationError};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Utc::now(),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/fit", post(fit))
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Credentialed CORS for the configured origins
///
/// Credentials rule out wildcard methods/headers, so the request's own are
/// mirrored back instead.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "AI Bike Fit Advisor is running"
    }))
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let now = Utc::now();
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": now.to_rfc3339(),
        "uptime_seconds": (now - state.started_at).num_seconds(),
    }))
}

async fn fit(
    payload: Result<Json<FitRequest>, JsonRejection>,
) -> Result<Json<FitReport>, AppError> {
    let Json(request) = payload?;
    tracing::debug!(
        "Fit request: height={} inseam={} style='{}' flexibility='{}' pain_points={:?}",
        request.height_in,
        request.inseam_in,
        request.riding_style,
        request.flexibility,
        request.pain_points
    );

    let profile = request.into_profile()?;
    let report = advise(&profile);

    tracing::info!(
        "Fit estimate: style={} saddle={}in confidence={} pain_insights={}",
        profile.riding_style,
        report.fit.saddle_height_in,
        report.fit.confidence,
        report.pain_analysis.len()
    );

    Ok(Json(report))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    MalformedBody(#[from] JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::Validation(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            AppError::MalformedBody(rejection) => (rejection.status(), rejection.body_text()),
        };

        tracing::warn!("Rejected request ({}): {}", status, message);

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
