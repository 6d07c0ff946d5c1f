use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;

/// GET / - service description
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Org Hierarchy API",
            "version": version,
            "description": "Employee hierarchy service built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "create": "POST /employees/create",
                "hierarchy": "POST /employees/hierarchy, GET /employees/hierarchy/:position_id",
            }
        }
    }))
}

/// GET /health - 200 when the employee store answers, 503 otherwise
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!("Health check failed at {}: {}", now, e);
            ApiError::service_unavailable("Employee store unavailable").into_response()
        }
    }
}
