use async_trait::async_trait;

use crate::database::manager::DatabaseError;
use crate::database::models::{Employee, EmployeeNode, NewEmployee};
use crate::hierarchy::include::IncludeSpec;

/// Persistence capabilities the hierarchy engine needs.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Look up a single employee by id.
    async fn find_one(&self, id: i32) -> Result<Option<Employee>, DatabaseError>;

    /// Insert a new employee and return it with its assigned id.
    async fn create(&self, new_employee: NewEmployee) -> Result<Employee, DatabaseError>;

    /// Every employee with `position_id`, ordered by id, each carrying its
    /// descendants down to `include.depth()` levels.
    async fn find_many(
        &self,
        position_id: i32,
        include: &IncludeSpec,
    ) -> Result<Vec<EmployeeNode>, DatabaseError>;

    /// Cheap connectivity probe for `/health`.
    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
