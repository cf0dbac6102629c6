//! Database/auth plan update builder.

use serde::Serialize;
use gnc_core::entities::DatabaseAuthPlan;
use gnc_core::enums::ImplementationStatus;

#[derive(Debug, Clone, Default, Serialize)]
pub struct DatabaseAuthPlanUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ImplementationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

impl DatabaseAuthPlanUpdate {
    pub(crate) fn apply(self, target: &mut DatabaseAuthPlan) {
        if let Some(status) = self.status {
            target.status = status;
        }
        if let Some(features) = self.features {
            target.features = features;
        }
    }
}

pub struct DatabaseAuthPlanUpdateBuilder(DatabaseAuthPlanUpdate);

impl DatabaseAuthPlanUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(DatabaseAuthPlanUpdate::default())
    }

    #[must_use]
    pub const fn status(mut self, status: ImplementationStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn features<S: Into<String>>(mut self, features: impl IntoIterator<Item = S>) -> Self {
        self.0.features = Some(features.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn build(self) -> DatabaseAuthPlanUpdate {
        self.0
    }
}
