//! Next step update builder.

use serde::Serialize;
use gnc_core::entities::NextSteps;
use gnc_core::enums::NextStepsPriority;

#[derive(Debug, Clone, Default, Serialize)]
pub struct NextStepUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl NextStepUpdate {
    pub(crate) fn apply(self, target: &mut NextSteps) {
        if let Some(step) = self.step {
            target.step = step;
        }
        if let Some(priority) = self.priority {
            target.priority = priority;
        }
    }
}

pub struct NextStepUpdateBuilder(NextStepUpdate);

impl NextStepUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(NextStepUpdate::default())
    }

    #[must_use]
    pub fn step(mut self, step: impl Into<String>) -> Self {
        self.0.step = Some(step.into());
        self
    }

    #[must_use]
    pub const fn priority(mut self, priority: NextStepsPriority) -> Self {
        self.0.priority = Some(priority.value());
        self
    }

    /// Raw priority value; out-of-range values are rejected on update.
    #[must_use]
    pub const fn priority_value(mut self, priority: i32) -> Self {
        self.0.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn build(self) -> NextStepUpdate {
        self.0
    }
}
