// handlers/mod.rs - HTTP handlers
//
// public.rs holds the service-level endpoints (/ and /health); employee/ holds
// the hierarchy endpoints under /employees.
pub mod employee;
pub mod public;

pub use public::{health, root};
