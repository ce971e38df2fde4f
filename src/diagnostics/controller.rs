use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::{
    app::{models::api_error::ApiError, structs::json_from_request::JsonFromRequest},
    AppState,
};

use super::service;

/// Accepts any JSON value a client sends, no schema is enforced.
pub async fn log_error(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(payload): JsonFromRequest<Value>,
) -> Result<Json<Value>, ApiError> {
    return service::log_error(payload, &state).await;
}
