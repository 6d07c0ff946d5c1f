//! Hierarchy engine: validated employee inserts and position-rooted tree reads.
//!
//! The writer and reader share an `EmployeeStore`; neither holds state between
//! calls beyond the include directive the reader builds once at construction.

pub mod error;
pub mod format;
pub mod include;
pub mod reader;
pub mod store;
pub mod writer;

pub use error::HierarchyError;
pub use format::{format_hierarchy, HierarchyNode};
pub use include::{IncludeSpec, DEFAULT_INCLUDE_DEPTH, MAX_INCLUDE_DEPTH};
pub use reader::HierarchyReader;
pub use store::EmployeeStore;
pub use writer::{CreateEmployee, CreatedEmployee, HierarchyWriter, EMPLOYEE_CREATED_MESSAGE};
