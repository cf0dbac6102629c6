//! Field-level validation results.
//!
//! Validation never truncates or normalizes input: it only reports. Errors
//! keep the order in which checks ran, so callers see them field by field.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Maximum length of a knowledge practice name.
pub const MAX_PRACTICE_CHARS: usize = 100;
/// Maximum length of a knowledge practice description.
pub const MAX_PRACTICE_DESCRIPTION_CHARS: usize = 500;
/// Maximum length of a learning goal.
pub const MAX_GOAL_CHARS: usize = 200;
/// Maximum length of a single learning step.
pub const MAX_STEP_CHARS: usize = 300;
/// Maximum number of steps in a learning strategy.
pub const MAX_STEPS: usize = 20;

/// One failed check on one field.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Ordered collection of [`FieldError`]s.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Record `"<Label> is required"` when `value` is empty or whitespace-only.
    ///
    /// Returns whether the value was present.
    pub fn require_text(&mut self, field: &str, label: &str, value: &str) -> bool {
        if is_blank(value) {
            self.push(field, format!("{label} is required"));
            return false;
        }
        true
    }

    /// Record `"<Label> must be N characters or less"` when `value` is too long.
    /// Length is counted in Unicode scalar values, not bytes.
    pub fn max_chars(&mut self, field: &str, label: &str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.push(field, format!("{label} must be {max} characters or less"));
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Whether any error was recorded against `field`.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Distinct field names in first-seen order.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for error in &self.errors {
            if !fields.contains(&error.field.as_str()) {
                fields.push(&error.field);
            }
        }
        fields
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns the collected errors when at least one check failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&messages.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Structured pass/fail report for callers that want to pre-check input
/// without attempting a create.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
}

impl From<Result<(), ValidationErrors>> for ValidationReport {
    fn from(result: Result<(), ValidationErrors>) -> Self {
        match result {
            Ok(()) => Self {
                is_valid: true,
                errors: Vec::new(),
            },
            Err(errors) => Self {
                is_valid: false,
                errors: errors.errors,
            },
        }
    }
}

/// Empty or whitespace-only.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
