use axum::Json;
use serde_json::{json, Value};

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "API is running" }))
}

/// GET /healthz
pub async fn healthz() -> Json<Value> {
    Json(json!({ "ok": true }))
}
