// Helpers that turn flat employee rows into nested `EmployeeNode` trees.

use std::collections::{BTreeMap, HashMap};

use crate::database::models::{Employee, EmployeeNode, HierarchyRow};

/// Assemble the rows of a bounded recursive query into one tree per root.
///
/// Roots are the depth-0 rows; every other row is attached under the row
/// whose id matches its `parent_id` within the same `root_id`. Roots and
/// siblings come out in ascending id order regardless of row order.
pub fn assemble_forest(mut rows: Vec<HierarchyRow>) -> Vec<EmployeeNode> {
    rows.sort_by_key(|row| (row.depth, row.id));

    let mut roots = Vec::new();
    let mut by_parent: HashMap<(i32, i32), Vec<Employee>> = HashMap::new();

    for row in rows {
        if row.depth == 0 {
            roots.push(row.into_employee());
            continue;
        }
        let Some(parent_id) = row.parent_id else {
            continue;
        };
        let root_id = row.root_id;
        by_parent
            .entry((root_id, parent_id))
            .or_default()
            .push(row.into_employee());
    }

    roots
        .into_iter()
        .map(|root| {
            let root_id = root.id;
            attach(root, root_id, &mut by_parent)
        })
        .collect()
}

fn attach(
    employee: Employee,
    root_id: i32,
    by_parent: &mut HashMap<(i32, i32), Vec<Employee>>,
) -> EmployeeNode {
    // Taking the entry out means a (root, parent) pair is expanded only once.
    let children = by_parent.remove(&(root_id, employee.id)).unwrap_or_default();
    EmployeeNode {
        employee,
        children: children
            .into_iter()
            .map(|child| attach(child, root_id, by_parent))
            .collect(),
    }
}

/// Build the subtree under `employee`, loading at most `depth` levels of
/// descendants from an index of child ids keyed by parent id.
pub fn build_subtree(
    employee: &Employee,
    rows: &BTreeMap<i32, Employee>,
    children_of: &BTreeMap<i32, Vec<i32>>,
    depth: u32,
) -> EmployeeNode {
    if depth == 0 {
        return EmployeeNode::leaf(employee.clone());
    }

    let children = children_of
        .get(&employee.id)
        .map(|ids| {
            ids.iter()
                .filter_map(|id| rows.get(id))
                .map(|child| build_subtree(child, rows, children_of, depth - 1))
                .collect()
        })
        .unwrap_or_default();

    EmployeeNode {
        employee: employee.clone(),
        children,
    }
}
