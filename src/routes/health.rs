use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
/// Returns 200 OK if the process is alive
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
/// Always ready (there is no backing store), but reports whether email
/// dispatch is configured so operators can spot a misdeployed instance.
pub async fn ready(State(app): State<AppState>) -> impl IntoResponse {
    let dispatch = if app.dispatch.is_some() {
        "enabled"
    } else {
        "disabled"
    };

    (
        StatusCode::OK,
        Json(json!({"status": "ready", "dispatch": dispatch})),
    )
}
