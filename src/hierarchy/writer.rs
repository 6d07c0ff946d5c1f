use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::database::models::{Employee, NewEmployee};
use crate::hierarchy::error::HierarchyError;
use crate::hierarchy::store::EmployeeStore;

pub const EMPLOYEE_CREATED_MESSAGE: &str = "Employee created successfully";
pub const PARENT_NOT_FOUND_MESSAGE: &str = "Parent employee does not exist";

/// Input for `HierarchyWriter::create_employee`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    pub name: String,
    pub position_id: i32,
    pub position_name: String,
    #[serde(default)]
    pub parent_id: Option<i32>,
}

impl CreateEmployee {
    fn validate(&self) -> Result<(), HierarchyError> {
        if self.name.trim().is_empty() {
            return Err(HierarchyError::validation("name must not be empty"));
        }
        if self.position_name.trim().is_empty() {
            return Err(HierarchyError::validation("positionName must not be empty"));
        }
        Ok(())
    }

    /// Parent reference worth validating; zero and negative ids mean "root"
    fn requested_parent(&self) -> Option<i32> {
        self.parent_id.filter(|id| *id > 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedEmployeeData {
    pub user: Employee,
}

/// Response envelope for a successful insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedEmployee {
    pub success: bool,
    pub message: String,
    pub data: CreatedEmployeeData,
}

impl CreatedEmployee {
    fn new(user: Employee) -> Self {
        Self {
            success: true,
            message: EMPLOYEE_CREATED_MESSAGE.to_string(),
            data: CreatedEmployeeData { user },
        }
    }
}

/// Validates and inserts employees
#[derive(Clone)]
pub struct HierarchyWriter {
    store: Arc<dyn EmployeeStore>,
}

impl HierarchyWriter {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Insert a new employee, checking that a positive `parent_id` exists.
    ///
    /// Storage failures during the parent lookup or the insert are logged and
    /// reported as `HierarchyError::CreateFailed`.
    #[instrument(skip(self, input), fields(name = %input.name, position_id = input.position_id))]
    pub async fn create_employee(&self, input: CreateEmployee) -> Result<CreatedEmployee, HierarchyError> {
        info!("Starting createEmployee with data: {:?}", input);
        input.validate()?;

        let parent_id = match input.requested_parent() {
            Some(parent_id) => {
                info!("Checking if parent employee with id {} exists", parent_id);
                let parent = self.store.find_one(parent_id).await.map_err(|e| {
                    error!("Failed to look up parent employee {}: {}", parent_id, e);
                    HierarchyError::CreateFailed
                })?;

                if parent.is_none() {
                    error!("Parent employee with id {} does not exist", parent_id);
                    return Err(HierarchyError::validation(PARENT_NOT_FOUND_MESSAGE));
                }

                info!("Parent employee with id {} verified", parent_id);
                Some(parent_id)
            }
            None => None,
        };

        info!("Creating new employee with name: {}", input.name);
        let employee = self
            .store
            .create(NewEmployee {
                name: input.name,
                position_id: input.position_id,
                position_name: input.position_name,
                parent_id,
            })
            .await
            .map_err(|e| {
                error!("Failed to create employee: {}", e);
                HierarchyError::CreateFailed
            })?;

        info!("Employee created successfully with ID {}", employee.id);
        Ok(CreatedEmployee::new(employee))
    }
}
