//! REST API for the expense categorization engine
//!
//! Thin HTTP collaborator: validates input, delegates to the
//! orchestrator, and appends results to the per-session log. All
//! classification behavior lives in the orchestrator.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use uuid::Uuid;

use crate::history::{InteractionKind, InteractionRecord, SessionStore};
use crate::models::Source;
use crate::orchestrator::Orchestrator;
use crate::taxonomy::Category;

/// =============================
/// Request / Response Models
/// =============================

#[derive(Debug, Deserialize)]
pub struct CategorizeRequest {
    pub description: String,
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategorizeResponse {
    pub category: Category,
    pub description: String,
    pub source: Source,
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub response: String,
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub api_available: bool,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub session_id: String,
    pub records: Vec<InteractionRecord>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn bad_request(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub orchestrator: Arc<Orchestrator>,
    pub sessions: SessionStore,
}

/// =============================
/// Session Id Helpers
/// =============================

fn stable_uuid_from_string(input: &str) -> Uuid {
    use sha2::{Digest, Sha256};

    let hash = Sha256::digest(input.as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&hash[..16]);

    // Set UUID version (4) and variant (RFC4122) bits.
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}

fn session_uuid(value: Option<&str>) -> Option<Uuid> {
    match value {
        Some(v) if !v.trim().is_empty() => {
            Some(Uuid::parse_str(v).unwrap_or_else(|_| stable_uuid_from_string(v)))
        }
        _ => None,
    }
}

/// =============================
/// Health & Status
/// =============================

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn status(State(state): State<ApiState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "online",
        api_available: state.orchestrator.remote_available(),
    })
}

/// =============================
/// Categorization Endpoint
/// =============================

async fn categorize(
    State(state): State<ApiState>,
    Json(req): Json<CategorizeRequest>,
) -> Result<Json<CategorizeResponse>, ApiError> {
    let description = req.description.trim().to_string();
    if description.is_empty() {
        return Err(bad_request("No expense description provided"));
    }

    info!("Categorize request: {}", description);

    let result = state
        .orchestrator
        .categorize(&description)
        .await
        .map_err(|e| bad_request(&e.to_string()))?;

    if let Some(session) = session_uuid(req.session_id.as_deref()) {
        state
            .sessions
            .append(
                session,
                InteractionRecord::new(
                    InteractionKind::Categorization,
                    description.clone(),
                    result.category.to_string(),
                ),
            )
            .await;
    }

    Ok(Json(CategorizeResponse {
        category: result.category,
        description,
        source: result.source,
        message: result.category.friendly_message(),
    }))
}

/// =============================
/// Query Endpoint
/// =============================

async fn query(
    State(state): State<ApiState>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    let question = req.query.trim().to_string();
    if question.is_empty() {
        return Err(bad_request("No query provided"));
    }

    info!("Query request: {}", question);

    let answer = state
        .orchestrator
        .ask(&question)
        .await
        .map_err(|e| bad_request(&e.to_string()))?;

    if let Some(session) = session_uuid(req.session_id.as_deref()) {
        state
            .sessions
            .append(
                session,
                InteractionRecord::new(InteractionKind::Query, question.clone(), answer.clone()),
            )
            .await;
    }

    Ok(Json(QueryResponse {
        response: answer,
        query: question,
    }))
}

/// =============================
/// Session History Endpoints
/// =============================

async fn get_history(
    State(state): State<ApiState>,
    Path(session_id): Path<String>,
) -> Json<HistoryResponse> {
    let session = session_uuid(Some(&session_id)).unwrap_or_else(Uuid::nil);
    let records = state.sessions.snapshot(session).await;

    Json(HistoryResponse {
        session_id,
        records,
    })
}

async fn clear_history(
    State(state): State<ApiState>,
    Path(session_id): Path<String>,
) -> StatusCode {
    let session = session_uuid(Some(&session_id)).unwrap_or_else(Uuid::nil);
    state.sessions.clear(session).await;
    StatusCode::NO_CONTENT
}

/// =============================
/// Router
/// =============================

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/status", get(status))
        .route("/api/categorize", post(categorize))
        .route("/api/query", post(query))
        .route(
            "/api/history/:session_id",
            get(get_history).delete(clear_history),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(
    state: ApiState,
    port: u16,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("API server listening on http://0.0.0.0:{}", port);
    info!("Local: http://127.0.0.1:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}
