use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::app::AppState;
use crate::error::ApiError;
use crate::hierarchy::HierarchyNode;

/// Body of POST /employees/hierarchy; `id` is a position id
#[derive(Debug, Deserialize)]
pub struct HierarchyRequest {
    pub id: i32,
}

/// POST /employees/hierarchy - nested trees rooted at every employee holding
/// the requested position
pub async fn hierarchy_post(
    State(state): State<AppState>,
    payload: Result<Json<HierarchyRequest>, JsonRejection>,
) -> Result<Json<Vec<HierarchyNode>>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::invalid_json(e.body_text()))?;
    let roots = state.reader.get_hierarchy_by_position_id(request.id).await?;
    Ok(Json(roots))
}

/// GET /employees/hierarchy/:position_id - same as the POST form
pub async fn hierarchy_get(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<HierarchyNode>>, ApiError> {
    let Path(position_id) = path.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let roots = state.reader.get_hierarchy_by_position_id(position_id).await?;
    Ok(Json(roots))
}
