use serde::{Deserialize, Serialize};

use crate::database::models::EmployeeNode;

/// Canonical nested shape returned to callers.
///
/// `child` is singular but holds the ordered list of formatted children; it is
/// `None` (serialized as `null`) for leaves, never an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyNode {
    pub id: i32,
    pub name: String,
    pub position_id: i32,
    pub position_name: String,
    pub child: Option<Vec<HierarchyNode>>,
}

impl HierarchyNode {
    /// Total number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + self
            .child
            .as_ref()
            .map(|children| children.iter().map(HierarchyNode::node_count).sum::<usize>())
            .unwrap_or(0)
    }

    /// Levels below this node; a leaf has height 0.
    pub fn height(&self) -> usize {
        self.child
            .as_ref()
            .and_then(|children| children.iter().map(HierarchyNode::height).max())
            .map(|h| h + 1)
            .unwrap_or(0)
    }
}

/// Reshape a raw node and its loaded descendants into a `HierarchyNode`.
///
/// Recursion stops at nodes with no loaded children, which includes nodes at
/// the materialization bound.
pub fn format_hierarchy(node: EmployeeNode) -> HierarchyNode {
    tracing::trace!(employee_id = node.employee.id, "formatting hierarchy node");

    let EmployeeNode { employee, children } = node;
    let child = if children.is_empty() {
        None
    } else {
        Some(children.into_iter().map(format_hierarchy).collect())
    };

    HierarchyNode {
        id: employee.id,
        name: employee.name,
        position_id: employee.position_id,
        position_name: employee.position_name,
        child,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::Employee;

    fn employee(id: i32, position_id: i32, parent_id: Option<i32>) -> Employee {
        Employee {
            id,
            name: format!("Employee {id}"),
            position_id,
            position_name: format!("Position {position_id}"),
            parent_id,
        }
    }

    #[test]
    fn leaf_formats_with_null_child() {
        let formatted = format_hierarchy(EmployeeNode::leaf(employee(1, 1, None)));
        assert_eq!(formatted.child, None);

        let value = serde_json::to_value(&formatted).unwrap();
        assert!(value["child"].is_null());
        assert_eq!(value["positionId"], 1);
        assert_eq!(value["positionName"], "Position 1");
        assert!(value.get("parentId").is_none());
    }

    #[test]
    fn nested_children_keep_order() {
        let tree = EmployeeNode {
            employee: employee(1, 7, None),
            children: vec![
                EmployeeNode {
                    employee: employee(2, 3, Some(1)),
                    children: vec![EmployeeNode::leaf(employee(4, 2, Some(2)))],
                },
                EmployeeNode::leaf(employee(3, 3, Some(1))),
            ],
        };

        let formatted = format_hierarchy(tree);
        let children = formatted.child.as_ref().unwrap();
        assert_eq!(children.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(children[0].child.as_ref().unwrap()[0].id, 4);
        assert_eq!(children[1].child, None);
        assert_eq!(formatted.node_count(), 4);
        assert_eq!(formatted.height(), 2);
    }
}
