use axum::Json;
use serde_json::{json, Value};

use crate::{app::models::api_error::ApiError, AppState};

pub async fn log_error(payload: Value, state: &AppState) -> Result<Json<Value>, ApiError> {
    state.sink.record(&payload);

    return Ok(Json(json!({ "ok": true })));
}
