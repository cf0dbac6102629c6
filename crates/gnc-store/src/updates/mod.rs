//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are merged over the stored record; everything else is kept. The
//! merged record is re-validated before it replaces the original.

pub mod database_auth_plan;
pub mod file_structure;
pub mod knowledge;
pub mod learning_strategy;
pub mod next_steps;
pub mod project_plan;
pub mod tech_stack;
