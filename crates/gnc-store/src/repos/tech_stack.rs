//! Tech stack repository.

use std::cmp::Ordering;

use chrono::Utc;
use gnc_core::entities::{CreateTechStack, TechStack};
use gnc_core::enums::TechCategory;
use gnc_core::ids::PREFIX_TECH_STACK;
use gnc_core::search::{
    Filter, SearchOptions, SortKey, TimeRange, by_created_at, by_updated_at, contains_ignore_case,
};
use gnc_core::validation::ValidationErrors;
use tracing::debug;

use crate::error::StoreError;
use crate::repos::{rejected, seed_with};
use crate::seed;
use crate::store::MemoryStore;
use crate::updates::tech_stack::TechStackUpdate;

const ENTITY: &str = "tech_stack";

#[derive(Debug, Clone, Default)]
pub struct TechStackFilter {
    /// Case-insensitive substring of `name`.
    pub name: Option<String>,
    pub category: Option<TechCategory>,
    /// Exact match on `version`.
    pub version: Option<String>,
    pub time: TimeRange,
}

impl Filter<TechStack> for TechStackFilter {
    fn matches(&self, item: &TechStack) -> bool {
        self.name
            .as_deref()
            .is_none_or(|name| contains_ignore_case(&item.name, name))
            && self.category.is_none_or(|category| item.category == category)
            && self.version.as_deref().is_none_or(|version| item.version == version)
            && self.time.contains(item)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TechStackSort {
    #[default]
    CreatedAt,
    UpdatedAt,
    Name,
    Category,
}

impl SortKey<TechStack> for TechStackSort {
    fn compare(self, a: &TechStack, b: &TechStack) -> Ordering {
        match self {
            Self::CreatedAt => by_created_at(a, b),
            Self::UpdatedAt => by_updated_at(a, b),
            Self::Name => a.name.cmp(&b.name),
            Self::Category => a.category.as_str().cmp(b.category.as_str()),
        }
    }
}

pub type TechStackSearch = SearchOptions<TechStackFilter, TechStackSort>;

fn validate(name: &str, version: &str, description: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.require_text("name", "Name", name);
    errors.require_text("version", "Version", version);
    errors.require_text("description", "Description", description);
    errors.into_result()
}

#[derive(Debug, Clone)]
pub struct TechStackService {
    store: MemoryStore<TechStack>,
}

impl Default for TechStackService {
    fn default() -> Self {
        Self::new()
    }
}

impl TechStackService {
    /// An empty repository. Call [`Self::initialize`] to load the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(PREFIX_TECH_STACK),
        }
    }

    /// Seed the default tech stack once. Later calls return 0.
    pub fn initialize(&mut self) -> usize {
        if self.store.is_seeded() {
            return 0;
        }
        let created = seed_with(ENTITY, seed::tech_stack(), |data| self.create_tech_stack(data));
        self.store.mark_seeded();
        created
    }

    /// Drop everything and re-seed. Re-seeded records get fresh IDs.
    pub fn reset(&mut self) -> usize {
        self.store.clear();
        self.initialize()
    }

    /// # Errors
    ///
    /// Returns `StoreError::Validation` if name, version or description is blank.
    pub fn create_tech_stack(&mut self, data: CreateTechStack) -> Result<TechStack, StoreError> {
        validate(&data.name, &data.version, &data.description)
            .map_err(|errors| rejected(ENTITY, errors))?;

        let now = Utc::now();
        let item = TechStack {
            id: self.store.next_id(),
            name: data.name,
            version: data.version,
            description: data.description,
            category: data.category,
            created_at: now,
            updated_at: now,
        };
        debug!(id = %item.id, name = %item.name, "created tech stack entry");
        self.store.insert(item.clone());
        Ok(item)
    }

    #[must_use]
    pub fn get_tech_stack(&self, id: &str) -> Option<TechStack> {
        self.store.get(id).cloned()
    }

    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the merged record is invalid.
    pub fn update_tech_stack(
        &mut self,
        id: &str,
        update: TechStackUpdate,
    ) -> Result<Option<TechStack>, StoreError> {
        self.store
            .update_with(
                id,
                |item| update.apply(item),
                |item| validate(&item.name, &item.version, &item.description),
            )
            .map_err(|errors| rejected(ENTITY, errors))
    }

    pub fn delete_tech_stack(&mut self, id: &str) -> bool {
        let removed = self.store.remove(id).is_some();
        if removed {
            debug!(id, "deleted tech stack entry");
        }
        removed
    }

    #[must_use]
    pub fn search_tech_stack(&self, options: &TechStackSearch) -> Vec<TechStack> {
        self.store.search(options)
    }

    #[must_use]
    pub fn list_tech_stack(&self) -> Vec<TechStack> {
        self.store.to_vec()
    }

    /// Entries in `category`, in insertion order.
    #[must_use]
    pub fn get_tech_stack_by_category(&self, category: TechCategory) -> Vec<TechStack> {
        self.store
            .values()
            .filter(|item| item.category == category)
            .cloned()
            .collect()
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::updates::tech_stack::TechStackUpdateBuilder;
    use gnc_core::search::SortDirection;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn seeded() -> TechStackService {
        let mut service = TechStackService::new();
        service.initialize();
        service
    }

    #[test]
    fn new_is_empty_until_initialized() {
        let mut service = TechStackService::new();
        assert!(service.is_empty());
        assert_eq!(service.initialize(), 6);
        assert_eq!(service.initialize(), 0);
        assert_eq!(service.len(), 6);
    }

    #[test]
    fn reset_reseeds_with_fresh_ids() {
        let mut service = seeded();
        let before: Vec<_> = service.list_tech_stack().into_iter().map(|t| t.id).collect();
        service
            .create_tech_stack(CreateTechStack::new("Jest", "29", "Test runner", TechCategory::TestingTool))
            .unwrap();

        assert_eq!(service.reset(), 6);
        let after: Vec<_> = service.list_tech_stack().into_iter().map(|t| t.id).collect();
        assert_eq!(after.len(), 6);
        assert!(after.iter().all(|id| !before.contains(id)));
    }

    #[rstest]
    #[case("", "1", "d", "name")]
    #[case("n", "  ", "d", "version")]
    #[case("n", "1", "", "description")]
    fn blank_required_field_is_named(
        #[case] name: &str,
        #[case] version: &str,
        #[case] description: &str,
        #[case] field: &str,
    ) {
        let mut service = TechStackService::new();
        let err = service
            .create_tech_stack(CreateTechStack::new(name, version, description, TechCategory::Tool))
            .unwrap_err();
        let errors = err.validation_errors().unwrap();
        assert_eq!(errors.fields(), vec![field]);
        assert!(service.is_empty());
    }

    #[test]
    fn update_merges_and_revalidates() {
        let mut service = seeded();
        let next = service
            .search_tech_stack(&TechStackSearch::new().filters(TechStackFilter {
                name: Some("next".into()),
                ..TechStackFilter::default()
            }))
            .remove(0);

        let updated = service
            .update_tech_stack(&next.id, TechStackUpdateBuilder::new().version("16").build())
            .unwrap()
            .unwrap();
        assert_eq!(updated.version, "16");
        assert_eq!(updated.name, "Next.js");
        assert_eq!(updated.created_at, next.created_at);
        assert!(updated.updated_at >= updated.created_at);

        let err = service
            .update_tech_stack(&next.id, TechStackUpdateBuilder::new().name("").build())
            .unwrap_err();
        assert!(err.validation_errors().is_some_and(|e| e.has_field("name")));
        assert_eq!(service.get_tech_stack(&next.id).map(|t| t.name), Some("Next.js".into()));
    }

    #[test]
    fn unknown_ids() {
        let mut service = seeded();
        assert!(service.get_tech_stack("tch-ffffffff").is_none());
        assert!(matches!(
            service.update_tech_stack("tch-ffffffff", TechStackUpdateBuilder::new().build()),
            Ok(None)
        ));
        assert!(!service.delete_tech_stack("tch-ffffffff"));
    }

    #[test]
    fn search_by_category_and_name_ascending() {
        let service = seeded();
        let libraries = service.search_tech_stack(
            &TechStackSearch::new()
                .filters(TechStackFilter {
                    category: Some(TechCategory::Library),
                    ..TechStackFilter::default()
                })
                .order_by(TechStackSort::Name, SortDirection::Asc),
        );
        let names: Vec<_> = libraries.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["React", "Tailwind CSS"]);
        assert_eq!(service.get_tech_stack_by_category(TechCategory::Library).len(), 2);
    }

    #[test]
    fn version_filter_is_exact() {
        let service = seeded();
        let hits = service.search_tech_stack(&TechStackSearch::new().filters(TechStackFilter {
            version: Some("5".into()),
            ..TechStackFilter::default()
        }));
        assert!(hits.is_empty());
    }
}
