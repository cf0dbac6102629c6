use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TechCategory;

/// One technology in the project's stack.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TechStack {
    pub id: String,
    pub name: String,
    /// Free-form version text, e.g. `"15+"` or `"Latest"`.
    pub version: String,
    pub description: String,
    pub category: TechCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateTechStack {
    pub name: String,
    pub version: String,
    pub description: String,
    pub category: TechCategory,
}

impl CreateTechStack {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        description: impl Into<String>,
        category: TechCategory,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: description.into(),
            category,
        }
    }
}
