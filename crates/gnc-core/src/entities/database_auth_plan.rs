use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ImplementationStatus;

/// The database and authentication plan and how far along it is.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DatabaseAuthPlan {
    pub id: String,
    pub status: ImplementationStatus,
    pub features: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateDatabaseAuthPlan {
    pub status: ImplementationStatus,
    pub features: Vec<String>,
}

impl CreateDatabaseAuthPlan {
    #[must_use]
    pub fn new<S: Into<String>>(
        status: ImplementationStatus,
        features: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            status,
            features: features.into_iter().map(Into::into).collect(),
        }
    }
}
