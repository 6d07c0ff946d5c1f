use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored employee row. `parent_id` is `None` for roots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub position_id: i32,
    pub position_name: String,
    pub parent_id: Option<i32>,
}

/// Fields handed to the store on insert; the store assigns `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub position_id: i32,
    pub position_name: String,
    pub parent_id: Option<i32>,
}

/// An employee with its descendants eagerly attached, as returned by
/// `EmployeeStore::find_many`. Children are ordered by ascending id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeNode {
    pub employee: Employee,
    pub children: Vec<EmployeeNode>,
}

impl EmployeeNode {
    pub fn leaf(employee: Employee) -> Self {
        Self {
            employee,
            children: Vec::new(),
        }
    }
}

/// Row produced by the recursive hierarchy query. `root_id` names the
/// matched node the row was reached from, so one employee may appear under
/// several roots.
#[derive(Debug, Clone, FromRow)]
pub struct HierarchyRow {
    pub id: i32,
    pub name: String,
    pub position_id: i32,
    pub position_name: String,
    pub parent_id: Option<i32>,
    pub root_id: i32,
    pub depth: i32,
}

impl HierarchyRow {
    pub fn into_employee(self) -> Employee {
        Employee {
            id: self.id,
            name: self.name,
            position_id: self.position_id,
            position_name: self.position_name,
            parent_id: self.parent_id,
        }
    }
}
