use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

use crate::app::AppState;
use crate::error::ApiError;
use crate::hierarchy::{CreateEmployee, CreatedEmployee};

/// POST /employees/create - create a new employee
///
/// Body: `{"name", "positionId", "positionName", "parentId"?}`. A `parentId`
/// of zero, a negative value, or `null` creates a top-level employee.
/// Responds `201` with `{"success": true, "message", "data": {"user"}}`.
pub async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployee>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedEmployee>), ApiError> {
    let Json(input) = payload.map_err(|e| ApiError::invalid_json(e.body_text()))?;
    let created = state.writer.create_employee(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
