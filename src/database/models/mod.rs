pub mod employee;

pub use employee::{Employee, EmployeeNode, HierarchyRow, NewEmployee};
