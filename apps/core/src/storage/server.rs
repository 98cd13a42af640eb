//! HTTP surface over the key-value store.
//!
//! A thin pass-through service: generic get/set/mget/prefix-scan endpoints
//! plus the emergency-resources convenience routes layered on top of them.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePool;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

use super::kv;
use crate::error::AppError;
use crate::models::{EmergencyContact, EmergencySettings};

/// Server configuration, read from the environment by `main`.
#[derive(Debug, Clone)]
pub struct KvServerConfig {
    pub addr: SocketAddr,
}

struct AppState {
    pool: SqlitePool,
}

type SharedState = Arc<AppState>;

/// Bind and serve until ctrl-c/SIGTERM.
pub async fn serve(config: KvServerConfig, pool: SqlitePool) -> Result<(), AppError> {
    let state = Arc::new(AppState { pool });
    let router = build_router(state);

    info!(%config.addr, "Binding HTTP listener");
    let listener = TcpListener::bind(config.addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server exited");
    Ok(())
}

fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/kv/set", post(kv_set))
        .route("/kv/get/:key", get(kv_get))
        .route("/kv/get-multiple", post(kv_get_multiple))
        .route("/kv/prefix/:prefix", get(kv_prefix))
        .route(
            "/emergency-contacts",
            post(save_emergency_contact),
        )
        .route("/emergency-contacts/:user_id", get(get_emergency_contacts))
        .route("/emergency-settings", post(save_emergency_settings))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[derive(Debug)]
struct ApiError {
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

    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation(message) => Self::bad_request(message),
            other => {
                error!("Request failed: {}", other);
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: other.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let payload = json!({ "error": self.message });
        (self.status, Json(payload)).into_response()
    }
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
struct SetRequest {
    key: String,
    value: Value,
}

async fn kv_set(
    State(state): State<SharedState>,
    Json(request): Json<SetRequest>,
) -> Result<Json<Value>, ApiError> {
    if request.key.is_empty() {
        return Err(ApiError::bad_request("Key and value are required"));
    }
    kv::set(&state.pool, &request.key, &request.value).await?;
    Ok(Json(json!({ "success": true, "message": "Data stored successfully" })))
}

async fn kv_get(
    State(state): State<SharedState>,
    Path(key): Path<String>,
) -> Result<Json<Value>, ApiError> {
    match kv::get(&state.pool, &key).await? {
        Some(value) => Ok(Json(json!({ "key": key, "value": value }))),
        None => Err(ApiError::not_found("Key not found")),
    }
}

#[derive(Debug, Deserialize)]
struct GetMultipleRequest {
    keys: Vec<String>,
}

async fn kv_get_multiple(
    State(state): State<SharedState>,
    Json(request): Json<GetMultipleRequest>,
) -> Result<Json<Value>, ApiError> {
    let results = kv::mget(&state.pool, &request.keys).await?;
    Ok(Json(json!({ "results": results })))
}

async fn kv_prefix(
    State(state): State<SharedState>,
    Path(prefix): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let results = kv::scan_by_prefix(&state.pool, &prefix).await?;
    Ok(Json(json!({ "results": results })))
}

#[derive(Debug, Deserialize)]
struct SaveContactRequest {
    user_id: String,
    contact: EmergencyContact,
}

async fn save_emergency_contact(
    State(state): State<SharedState>,
    Json(request): Json<SaveContactRequest>,
) -> Result<Json<Value>, ApiError> {
    if request.user_id.is_empty() {
        return Err(ApiError::bad_request("User ID and contact are required"));
    }
    request
        .contact
        .validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let key = format!("emergency_contacts_{}", request.user_id);

    let mut contacts: Vec<EmergencyContact> = match kv::get(&state.pool, &key).await? {
        Some(value) => serde_json::from_value(value).map_err(AppError::from)?,
        None => Vec::new(),
    };

    let mut contact = request.contact;
    contact.id = Some(Uuid::new_v4().to_string());
    contact.created_at = Some(Utc::now());
    contacts.push(contact.clone());

    let serialized = serde_json::to_value(&contacts).map_err(AppError::from)?;
    kv::set(&state.pool, &key, &serialized).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Emergency contact saved successfully",
        "contact": contact,
    })))
}

async fn get_emergency_contacts(
    State(state): State<SharedState>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let key = format!("emergency_contacts_{}", user_id);
    let contacts = kv::get(&state.pool, &key)
        .await?
        .unwrap_or_else(|| json!([]));
    Ok(Json(json!({ "contacts": contacts })))
}

#[derive(Debug, Deserialize)]
struct SaveSettingsRequest {
    user_id: String,
    settings: EmergencySettings,
}

async fn save_emergency_settings(
    State(state): State<SharedState>,
    Json(request): Json<SaveSettingsRequest>,
) -> Result<Json<Value>, ApiError> {
    if request.user_id.is_empty() {
        return Err(ApiError::bad_request("User ID and settings are required"));
    }

    let key = format!("emergency_settings_{}", request.user_id);
    let mut settings = request.settings;
    settings.updated_at = Some(Utc::now());

    let serialized = serde_json::to_value(&settings).map_err(AppError::from)?;
    kv::set(&state.pool, &key, &serialized).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Emergency settings saved successfully",
        "settings": settings,
    })))
}
