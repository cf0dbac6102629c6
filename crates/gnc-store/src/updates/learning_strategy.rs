//! Learning strategy update builder.

use serde::Serialize;
use gnc_core::entities::LearningStrategy;

#[derive(Debug, Clone, Default, Serialize)]
pub struct LearningStrategyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    /// Replaces the whole step list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
}

impl LearningStrategyUpdate {
    pub(crate) fn apply(self, target: &mut LearningStrategy) {
        if let Some(goal) = self.goal {
            target.goal = goal;
        }
        if let Some(steps) = self.steps {
            target.steps = steps;
        }
    }
}

pub struct LearningStrategyUpdateBuilder(LearningStrategyUpdate);

impl LearningStrategyUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(LearningStrategyUpdate::default())
    }

    #[must_use]
    pub fn goal(mut self, goal: impl Into<String>) -> Self {
        self.0.goal = Some(goal.into());
        self
    }

    #[must_use]
    pub fn steps<S: Into<String>>(mut self, steps: impl IntoIterator<Item = S>) -> Self {
        self.0.steps = Some(steps.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn build(self) -> LearningStrategyUpdate {
        self.0
    }
}
