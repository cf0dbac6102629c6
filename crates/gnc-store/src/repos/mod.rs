//! Repository services, one module per entity.
//!
//! Every service follows the same shape: `create_x` validates and stamps a
//! new record, `get_x`/`delete_x` never fail, `update_x` returns `Ok(None)`
//! for an unknown ID and re-validates the merged record, and `search_x`
//! applies filter, stable sort and pagination over insertion order.

pub mod database_auth_plan;
pub mod file_structure;
pub mod knowledge;
pub mod learning_strategy;
pub mod next_steps;
pub mod tech_stack;

use std::fmt::Display;

use gnc_core::validation::ValidationErrors;
use tracing::{debug, warn};

use crate::error::StoreError;

/// Log and wrap a validation failure.
pub(crate) fn rejected(entity: &'static str, errors: ValidationErrors) -> StoreError {
    warn!(entity, %errors, "validation rejected");
    StoreError::Validation(errors)
}

/// Create each default record, logging failures instead of aborting.
///
/// Returns the number of records created.
pub(crate) fn seed_with<C, T, E: Display>(
    entity: &'static str,
    items: Vec<C>,
    mut create: impl FnMut(C) -> Result<T, E>,
) -> usize {
    let mut created = 0;
    for item in items {
        match create(item) {
            Ok(_) => created += 1,
            Err(error) => warn!(entity, %error, "failed to seed default record"),
        }
    }
    debug!(entity, created, "seeded defaults");
    created
}
