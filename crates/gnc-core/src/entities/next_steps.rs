use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::NextStepsPriority;

/// One upcoming action for an agent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NextSteps {
    pub id: String,
    pub step: String,
    /// 1 = urgent .. 4 = low. Not unique; equal priorities keep insertion order.
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NextSteps {
    /// Named level for `priority`, if it is in range.
    #[must_use]
    pub const fn priority_level(&self) -> Option<NextStepsPriority> {
        NextStepsPriority::from_value(self.priority)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateNextStep {
    pub step: String,
    pub priority: i32,
}

impl CreateNextStep {
    #[must_use]
    pub fn new(step: impl Into<String>, priority: NextStepsPriority) -> Self {
        Self {
            step: step.into(),
            priority: priority.value(),
        }
    }
}
