use thiserror::Error;

/// Failures surfaced by the hierarchy writer and reader.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Failed to create employee")]
    CreateFailed,

    #[error("Error while fetching employee hierarchy: {0}")]
    Persistence(String),
}

impl HierarchyError {
    pub fn validation(message: impl Into<String>) -> Self {
        HierarchyError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        HierarchyError::NotFound(message.into())
    }
}
