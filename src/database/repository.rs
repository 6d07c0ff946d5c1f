use async_trait::async_trait;
use sqlx::PgPool;
use std::time::Instant;
use tracing::{debug, warn};

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{Employee, EmployeeNode, HierarchyRow, NewEmployee};
use crate::database::tree::assemble_forest;
use crate::hierarchy::include::IncludeSpec;
use crate::hierarchy::store::EmployeeStore;

const SELECT_EMPLOYEE_BY_ID: &str =
    "SELECT id, name, position_id, position_name, parent_id FROM employees WHERE id = $1";

const INSERT_EMPLOYEE: &str = "INSERT INTO employees (name, position_id, position_name, parent_id)
     VALUES ($1, $2, $3, $4)
     RETURNING id, name, position_id, position_name, parent_id";

// Every employee with the requested position plus its descendants, walked
// down at most $2 levels. `root_id` keeps overlapping subtrees apart.
const SELECT_HIERARCHY: &str = "WITH RECURSIVE tree AS (
        SELECT e.id, e.name, e.position_id, e.position_name, e.parent_id,
               e.id AS root_id, 0 AS depth
        FROM employees e
        WHERE e.position_id = $1
        UNION ALL
        SELECT c.id, c.name, c.position_id, c.position_name, c.parent_id,
               t.root_id, t.depth + 1
        FROM employees c
        JOIN tree t ON c.parent_id = t.id
        WHERE t.depth < $2
    )
    SELECT id, name, position_id, position_name, parent_id, root_id, depth
    FROM tree
    ORDER BY depth, id";

/// PostgreSQL-backed employee store
pub struct PgEmployeeStore {
    pool: PgPool,
    slow_query_threshold_ms: Option<u64>,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            slow_query_threshold_ms: None,
        }
    }

    /// Warn when a hierarchy fetch takes longer than `threshold_ms`
    pub fn with_slow_query_warning(mut self, threshold_ms: u64) -> Self {
        self.slow_query_threshold_ms = Some(threshold_ms);
        self
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn find_one(&self, id: i32) -> Result<Option<Employee>, DatabaseError> {
        let employee = sqlx::query_as::<_, Employee>(SELECT_EMPLOYEE_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(employee)
    }

    async fn create(&self, new_employee: NewEmployee) -> Result<Employee, DatabaseError> {
        let employee = sqlx::query_as::<_, Employee>(INSERT_EMPLOYEE)
            .bind(&new_employee.name)
            .bind(new_employee.position_id)
            .bind(&new_employee.position_name)
            .bind(new_employee.parent_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(employee)
    }

    async fn find_many(
        &self,
        position_id: i32,
        include: &IncludeSpec,
    ) -> Result<Vec<EmployeeNode>, DatabaseError> {
        let depth = i32::try_from(include.depth())
            .map_err(|_| DatabaseError::QueryError("include depth out of range".to_string()))?;

        let started = Instant::now();
        let rows = sqlx::query_as::<_, HierarchyRow>(SELECT_HIERARCHY)
            .bind(position_id)
            .bind(depth)
            .fetch_all(&self.pool)
            .await?;
        let elapsed_ms = started.elapsed().as_millis();

        debug!(
            "Hierarchy query for position {} returned {} rows in {}ms",
            position_id,
            rows.len(),
            elapsed_ms
        );
        if let Some(threshold) = self.slow_query_threshold_ms {
            if elapsed_ms > u128::from(threshold) {
                warn!(
                    "Slow hierarchy query for position {}: {}ms (threshold {}ms)",
                    position_id, elapsed_ms, threshold
                );
            }
        }

        Ok(assemble_forest(rows))
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}
