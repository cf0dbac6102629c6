//! Insertion-ordered in-memory storage shared by every repository.
//!
//! `MemoryStore` is the only thing that touches the map. Iteration follows
//! insertion order (deletes use `shift_remove`), which is what makes search
//! tie-breaking deterministic.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use gnc_core::entities::{
    DatabaseAuthPlan, FileStructure, KnowledgeManagement, LearningStrategy, NextSteps,
    ProjectPlanTemplate, Section, TechStack,
};
use gnc_core::ids::IdGenerator;
use gnc_core::search::{Filter, SearchOptions, SortKey, Timestamped, apply_search};
use gnc_core::validation::ValidationErrors;

/// An entity that can live in a [`MemoryStore`].
pub trait Record: Clone + Timestamped {
    fn id(&self) -> &str;
    fn set_updated_at(&mut self, at: DateTime<Utc>);
}

macro_rules! impl_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn set_updated_at(&mut self, at: DateTime<Utc>) {
                    self.updated_at = at;
                }
            }
        )+
    };
}

impl_record!(
    DatabaseAuthPlan,
    FileStructure,
    KnowledgeManagement,
    LearningStrategy,
    NextSteps,
    ProjectPlanTemplate,
    Section,
    TechStack,
);

/// Timestamp for a mutation of a record created at `created_at`.
///
/// Clamped so `updated_at` never precedes `created_at`, even if the wall
/// clock steps backwards.
#[must_use]
pub fn touch_time(created_at: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(created_at)
}

#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    items: IndexMap<String, T>,
    ids: IdGenerator,
    seeded: bool,
}

impl<T: Record> MemoryStore<T> {
    #[must_use]
    pub fn new(prefix: &'static str) -> Self {
        Self {
            items: IndexMap::new(),
            ids: IdGenerator::new(prefix),
            seeded: false,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.ids.next_id()
    }

    pub fn insert(&mut self, item: T) {
        self.items.insert(item.id().to_string(), item);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.get_mut(id)
    }

    /// Remove by ID, preserving the relative order of the remaining entries.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        self.items.shift_remove(id)
    }

    /// Copy-on-write update.
    ///
    /// Returns `Ok(None)` if `id` is absent. Otherwise `apply` mutates a copy,
    /// `validate` checks the merged copy, and only a valid copy replaces the
    /// stored record with a fresh `updated_at`. `created_at` is untouched.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of the merged record; the stored record
    /// is left unchanged.
    pub fn update_with(
        &mut self,
        id: &str,
        apply: impl FnOnce(&mut T),
        validate: impl FnOnce(&T) -> Result<(), ValidationErrors>,
    ) -> Result<Option<T>, ValidationErrors> {
        let Some(existing) = self.items.get(id) else {
            return Ok(None);
        };

        let mut updated = existing.clone();
        apply(&mut updated);
        validate(&updated)?;
        updated.set_updated_at(touch_time(updated.created_at()));

        self.items.insert(id.to_string(), updated.clone());
        Ok(Some(updated))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    #[must_use]
    pub fn search<F: Filter<T>, S: SortKey<T>>(&self, options: &SearchOptions<F, S>) -> Vec<T> {
        apply_search(self.items.values(), options)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every record and forget that defaults were seeded. The ID
    /// generator keeps counting, so later IDs never reuse old ones.
    pub fn clear(&mut self) {
        self.items.clear();
        self.seeded = false;
    }

    #[must_use]
    pub const fn is_seeded(&self) -> bool {
        self.seeded
    }

    pub const fn mark_seeded(&mut self) {
        self.seeded = true;
    }
}
