//! Database and authentication plan repository.

use std::cmp::Ordering;

use chrono::Utc;
use gnc_core::entities::{CreateDatabaseAuthPlan, DatabaseAuthPlan};
use gnc_core::enums::ImplementationStatus;
use gnc_core::ids::PREFIX_DATABASE_AUTH_PLAN;
use gnc_core::search::{Filter, SearchOptions, SortKey, TimeRange, by_created_at, by_updated_at};
use gnc_core::validation::{ValidationErrors, is_blank};
use tracing::debug;

use crate::error::StoreError;
use crate::repos::{rejected, seed_with};
use crate::seed;
use crate::store::MemoryStore;
use crate::updates::database_auth_plan::DatabaseAuthPlanUpdate;

const ENTITY: &str = "database_auth_plan";

#[derive(Debug, Clone, Default)]
pub struct DatabaseAuthPlanFilter {
    pub status: Option<ImplementationStatus>,
    pub time: TimeRange,
}

impl Filter<DatabaseAuthPlan> for DatabaseAuthPlanFilter {
    fn matches(&self, item: &DatabaseAuthPlan) -> bool {
        self.status.is_none_or(|status| item.status == status) && self.time.contains(item)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DatabaseAuthPlanSort {
    #[default]
    CreatedAt,
    UpdatedAt,
    Status,
}

impl SortKey<DatabaseAuthPlan> for DatabaseAuthPlanSort {
    fn compare(self, a: &DatabaseAuthPlan, b: &DatabaseAuthPlan) -> Ordering {
        match self {
            Self::CreatedAt => by_created_at(a, b),
            Self::UpdatedAt => by_updated_at(a, b),
            Self::Status => a.status.as_str().cmp(b.status.as_str()),
        }
    }
}

pub type DatabaseAuthPlanSearch = SearchOptions<DatabaseAuthPlanFilter, DatabaseAuthPlanSort>;

fn validate(features: &[String]) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if features.is_empty() {
        errors.push("features", "At least one feature is required");
    }
    for (index, feature) in features.iter().enumerate() {
        if is_blank(feature) {
            errors.push(
                format!("features[{index}]"),
                format!("Feature {} cannot be empty", index + 1),
            );
        }
    }
    errors.into_result()
}

#[derive(Debug, Clone)]
pub struct DatabaseAuthPlanService {
    store: MemoryStore<DatabaseAuthPlan>,
}

impl Default for DatabaseAuthPlanService {
    fn default() -> Self {
        Self::new()
    }
}

impl DatabaseAuthPlanService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(PREFIX_DATABASE_AUTH_PLAN),
        }
    }

    pub fn initialize(&mut self) -> usize {
        if self.store.is_seeded() {
            return 0;
        }
        let created = seed_with(ENTITY, seed::database_auth_plans(), |data| {
            self.create_database_auth_plan(data)
        });
        self.store.mark_seeded();
        created
    }

    pub fn reset(&mut self) -> usize {
        self.store.clear();
        self.initialize()
    }

    /// # Errors
    ///
    /// Returns `StoreError::Validation` if there are no features or any
    /// feature is blank.
    pub fn create_database_auth_plan(
        &mut self,
        data: CreateDatabaseAuthPlan,
    ) -> Result<DatabaseAuthPlan, StoreError> {
        validate(&data.features).map_err(|errors| rejected(ENTITY, errors))?;

        let now = Utc::now();
        let item = DatabaseAuthPlan {
            id: self.store.next_id(),
            status: data.status,
            features: data.features,
            created_at: now,
            updated_at: now,
        };
        debug!(id = %item.id, status = %item.status, "created database/auth plan");
        self.store.insert(item.clone());
        Ok(item)
    }

    #[must_use]
    pub fn get_database_auth_plan(&self, id: &str) -> Option<DatabaseAuthPlan> {
        self.store.get(id).cloned()
    }

    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the merged record is invalid.
    pub fn update_database_auth_plan(
        &mut self,
        id: &str,
        update: DatabaseAuthPlanUpdate,
    ) -> Result<Option<DatabaseAuthPlan>, StoreError> {
        self.store
            .update_with(id, |item| update.apply(item), |item| validate(&item.features))
            .map_err(|errors| rejected(ENTITY, errors))
    }

    pub fn delete_database_auth_plan(&mut self, id: &str) -> bool {
        let removed = self.store.remove(id).is_some();
        if removed {
            debug!(id, "deleted database/auth plan");
        }
        removed
    }

    #[must_use]
    pub fn search_database_auth_plans(
        &self,
        options: &DatabaseAuthPlanSearch,
    ) -> Vec<DatabaseAuthPlan> {
        self.store.search(options)
    }

    #[must_use]
    pub fn list_database_auth_plans(&self) -> Vec<DatabaseAuthPlan> {
        self.store.to_vec()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
