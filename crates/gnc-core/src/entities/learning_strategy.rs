use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A goal and the ordered steps an agent follows to reach it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LearningStrategy {
    pub id: String,
    pub goal: String,
    pub steps: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateLearningStrategy {
    pub goal: String,
    pub steps: Vec<String>,
}

impl CreateLearningStrategy {
    #[must_use]
    pub fn new<S: Into<String>>(goal: impl Into<String>, steps: impl IntoIterator<Item = S>) -> Self {
        Self {
            goal: goal.into(),
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }
}
