//! Repository error types for gnc-store.

use gnc_core::validation::ValidationErrors;
use thiserror::Error;

/// Errors from repository operations.
///
/// A missing entity on `get`/`update`/`delete` is not an error: those return
/// `None`/`false`. `NotFound` is reserved for operations that need a parent
/// entity to exist, such as adding a section to a template.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input failed field-level validation.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// A referenced parent entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl StoreError {
    /// The field errors, when this is a validation failure.
    #[must_use]
    pub const fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::NotFound { .. } => None,
        }
    }
}
