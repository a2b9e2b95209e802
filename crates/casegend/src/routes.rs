//! API routes for casegend

use crate::server::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use casegen_common::prompt::build_messages;
use casegen_common::{parse_report, CasegenError, TestCase};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

type AppStateArc = Arc<AppState>;

/// Form page served at the root; renders results client side.
const INDEX_HTML: &str = include_str!("../assets/index.html");

// ============================================================================
// UI Routes
// ============================================================================

pub fn ui_routes() -> Router<AppStateArc> {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// ============================================================================
// API Routes
// ============================================================================

/// Request to generate test cases from a description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub description: String,
}

/// Structured result of one generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub count: usize,
    pub test_cases: Vec<TestCase>,
    /// Raw response text, for the disclosure panel.
    pub raw: String,
}

/// Error body carrying a stable kind for the page's error panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
    /// Raw response text when the failure was a malformed reply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model: String,
}

pub fn api_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/v1/generate", post(generate))
        .route("/v1/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.client.model().to_string(),
    })
}

/// One submit maps to exactly one completion call; no retry, no cache.
async fn generate(
    State(state): State<AppStateArc>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorBody>)> {
    let req_id = Uuid::new_v4();

    if req.description.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                kind: "bad_request".to_string(),
                message: "Test case description must not be empty".to_string(),
                raw: None,
            }),
        ));
    }

    info!("[{}]  Generating test cases", req_id);

    let messages = build_messages(&req.description);
    let raw = state.client.complete(&messages).await.map_err(|e| {
        error!("[{}]  Completion call failed: {}", req_id, e);
        error_response(&e)
    })?;

    let report = parse_report(&raw).map_err(|e| {
        error!("[{}]  {}", req_id, e);
        error_response(&e)
    })?;

    info!("[{}]  Generated {} test cases", req_id, report.count());

    Ok(Json(GenerateResponse {
        count: report.count(),
        test_cases: report.cases,
        raw,
    }))
}

fn error_response(err: &CasegenError) -> (StatusCode, Json<ErrorBody>) {
    let status = match err {
        CasegenError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
        CasegenError::RemoteCall(_) => StatusCode::BAD_GATEWAY,
        CasegenError::MalformedResponse { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    };
    let raw = match err {
        CasegenError::MalformedResponse { raw, .. } => Some(raw.clone()),
        _ => None,
    };

    (
        status,
        Json(ErrorBody {
            kind: err.kind().to_string(),
            message: err.to_string(),
            raw,
        }),
    )
}
