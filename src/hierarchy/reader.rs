use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use crate::hierarchy::error::HierarchyError;
use crate::hierarchy::format::{format_hierarchy, HierarchyNode};
use crate::hierarchy::include::{IncludeSpec, MAX_INCLUDE_DEPTH};
use crate::hierarchy::store::EmployeeStore;

/// Fetches employees by position together with their subtrees
#[derive(Clone)]
pub struct HierarchyReader {
    store: Arc<dyn EmployeeStore>,
    include: Arc<IncludeSpec>,
    collapse_read_errors: bool,
}

impl HierarchyReader {
    pub fn new(store: Arc<dyn EmployeeStore>, max_depth: u32) -> Self {
        if max_depth > MAX_INCLUDE_DEPTH {
            warn!("Include depth {} exceeds {}, clamping", max_depth, MAX_INCLUDE_DEPTH);
        }
        let max_depth = max_depth.min(MAX_INCLUDE_DEPTH);
        info!("Building include hierarchy with depth: {}", max_depth);
        Self {
            store,
            include: Arc::new(IncludeSpec::build(max_depth)),
            collapse_read_errors: false,
        }
    }

    /// Report storage failures as `NotFound` rather than `Persistence`
    pub fn with_collapsed_read_errors(mut self, collapse: bool) -> Self {
        self.collapse_read_errors = collapse;
        self
    }

    pub fn include(&self) -> &IncludeSpec {
        &self.include
    }

    #[instrument(skip(self))]
    pub async fn get_hierarchy_by_position_id(
        &self,
        position_id: i32,
    ) -> Result<Vec<HierarchyNode>, HierarchyError> {
        info!("Fetching employee hierarchy for position ID {}", position_id);
        debug!("Include directive: {}", self.include.to_json());

        let employees = self
            .store
            .find_many(position_id, &self.include)
            .await
            .map_err(|e| {
                error!("Error while fetching employee hierarchy: {}", e);
                if self.collapse_read_errors {
                    HierarchyError::not_found("Error while fetching employee hierarchy")
                } else {
                    HierarchyError::Persistence(e.to_string())
                }
            })?;

        if employees.is_empty() {
            warn!("No employees found for position ID {}", position_id);
            return Err(HierarchyError::not_found(format!(
                "No employees found for position ID {}",
                position_id
            )));
        }

        info!(
            "Employee hierarchy fetched successfully for position ID {} ({} roots)",
            position_id,
            employees.len()
        );
        Ok(employees.into_iter().map(format_hierarchy).collect())
    }
}
