//! Settings API endpoints - JSON API

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use docsettings_core::{Document, SettingsStore, ValidationResult};
use serde_json::Value;

use crate::error::{ApiError, StatusBody};
use crate::AppState;

/// Current settings document
pub async fn api_settings(State(state): State<AppState>) -> Json<Document> {
    let store = state.store.read().await;
    Json(store.get().clone())
}

/// Single top-level section
pub async fn api_settings_section(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let store = state.store.read().await;
    store
        .section(&name)
        .cloned()
        .map(Json)
        .ok_or(ApiError::SectionNotFound { name })
}

/// Validate and merge a candidate document
pub async fn api_update_settings(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<StatusBody>, ApiError> {
    let Json(candidate) = payload.map_err(|e| ApiError::BadRequest {
        message: e.body_text(),
    })?;

    let mut store = state.store.write().await;
    store.update(candidate).await?;

    Ok(Json(StatusBody::success()))
}

/// Dry-run validation; always answers 200
pub async fn api_validate_settings(
    payload: Result<Json<Value>, JsonRejection>,
) -> Json<ValidationResult> {
    let result = match payload {
        Ok(Json(candidate)) => SettingsStore::validate(&candidate),
        Err(e) => ValidationResult::from_errors(vec![e.body_text()]),
    };
    Json(result)
}

/// Document source paths that are missing or unreadable
pub async fn api_path_problems(State(state): State<AppState>) -> Json<ValidationResult> {
    let store = state.store.read().await;
    Json(ValidationResult::from_errors(store.validate_paths()))
}
