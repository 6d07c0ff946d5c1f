pub mod manager;
pub mod memory;
pub mod models;
pub mod repository;
pub mod schema;
pub mod tree;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryEmployeeStore;
pub use repository::PgEmployeeStore;
