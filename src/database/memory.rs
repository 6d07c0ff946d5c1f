use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::database::manager::DatabaseError;
use crate::database::models::{Employee, EmployeeNode, NewEmployee};
use crate::database::tree::build_subtree;
use crate::hierarchy::include::IncludeSpec;
use crate::hierarchy::store::EmployeeStore;

#[derive(Debug, Default)]
struct Inner {
    rows: BTreeMap<i32, Employee>,
    last_id: i32,
}

/// Process-local employee store. Ids start at 1 and increase by one per
/// insert, like a `SERIAL` column.
#[derive(Debug, Clone, Default)]
pub struct MemoryEmployeeStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn find_one(&self, id: i32) -> Result<Option<Employee>, DatabaseError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, new_employee: NewEmployee) -> Result<Employee, DatabaseError> {
        let mut inner = self.inner.write().await;

        // Mirror the foreign key a relational store would enforce.
        if let Some(parent_id) = new_employee.parent_id {
            if !inner.rows.contains_key(&parent_id) {
                return Err(DatabaseError::QueryError(format!(
                    "parent_id {} violates foreign key",
                    parent_id
                )));
            }
        }

        inner.last_id += 1;
        let employee = Employee {
            id: inner.last_id,
            name: new_employee.name,
            position_id: new_employee.position_id,
            position_name: new_employee.position_name,
            parent_id: new_employee.parent_id,
        };
        inner.rows.insert(employee.id, employee.clone());
        debug!("Inserted employee {} into memory store", employee.id);
        Ok(employee)
    }

    async fn find_many(
        &self,
        position_id: i32,
        include: &IncludeSpec,
    ) -> Result<Vec<EmployeeNode>, DatabaseError> {
        let inner = self.inner.read().await;

        let mut children_of: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
        for employee in inner.rows.values() {
            if let Some(parent_id) = employee.parent_id {
                children_of.entry(parent_id).or_default().push(employee.id);
            }
        }

        let depth = include.depth();
        Ok(inner
            .rows
            .values()
            .filter(|employee| employee.position_id == position_id)
            .map(|employee| build_subtree(employee, &inner.rows, &children_of, depth))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_employee(name: &str, position_id: i32, parent_id: Option<i32>) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            position_id,
            position_name: format!("Position {position_id}"),
            parent_id,
        }
    }

    #[tokio::test]
    async fn assigns_sequential_ids() {
        let store = MemoryEmployeeStore::new();
        let a = store.create(new_employee("A", 1, None)).await.unwrap();
        let b = store.create(new_employee("B", 2, Some(a.id))).await.unwrap();

        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(store.find_one(2).await.unwrap(), Some(b));
        assert_eq!(store.find_one(3).await.unwrap(), None);
    }

    #[tokio::test]
    async fn rejects_dangling_parent() {
        let store = MemoryEmployeeStore::new();
        let result = store.create(new_employee("A", 1, Some(42))).await;
        assert!(matches!(result, Err(DatabaseError::QueryError(_))));
        assert_eq!(store.find_one(1).await.unwrap(), None);

        // A rejected insert does not consume an id
        let first = store.create(new_employee("A", 1, None)).await.unwrap();
        assert_eq!(first.id, 1);
    }

    #[tokio::test]
    async fn find_many_respects_include_depth() {
        let store = MemoryEmployeeStore::new();
        let root = store.create(new_employee("Root", 1, None)).await.unwrap();
        let mid = store.create(new_employee("Mid", 2, Some(root.id))).await.unwrap();
        store.create(new_employee("Leaf", 3, Some(mid.id))).await.unwrap();

        let shallow = store.find_many(1, &IncludeSpec::build(1)).await.unwrap();
        assert_eq!(shallow.len(), 1);
        assert_eq!(shallow[0].children.len(), 1);
        assert!(shallow[0].children[0].children.is_empty());

        let deep = store.find_many(1, &IncludeSpec::build(30)).await.unwrap();
        assert_eq!(deep[0].children[0].children[0].employee.name, "Leaf");
    }
}
