pub mod create;
pub mod hierarchy;

// Re-export handler functions for use in routing
pub use create::create_post;
pub use hierarchy::{hierarchy_get, hierarchy_post};
