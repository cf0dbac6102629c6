//! Knowledge management repository.
//!
//! Category and priority are stored on each entry. When a create payload
//! leaves them out they are inferred once from the practice name; later
//! updates never re-derive them.

use std::cmp::Ordering;

use chrono::Utc;
use indexmap::IndexMap;
use serde::Serialize;

use gnc_core::entities::{CreateKnowledgeEntry, KnowledgeManagement};
use gnc_core::enums::{KnowledgeCategory, KnowledgePriority};
use gnc_core::ids::PREFIX_KNOWLEDGE;
use gnc_core::search::{
    Filter, SearchOptions, SortKey, TimeRange, by_created_at, by_updated_at, contains_ignore_case,
};
use gnc_core::validation::{
    MAX_PRACTICE_CHARS, MAX_PRACTICE_DESCRIPTION_CHARS, ValidationErrors, ValidationReport,
};
use tracing::debug;

use crate::error::StoreError;
use crate::repos::{rejected, seed_with};
use crate::seed;
use crate::store::MemoryStore;
use crate::updates::knowledge::KnowledgeUpdate;

const ENTITY: &str = "knowledge";

const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct KnowledgeFilter {
    /// Case-insensitive substring of `practice`.
    pub practice: Option<String>,
    pub category: Option<KnowledgeCategory>,
    pub priority: Option<KnowledgePriority>,
    pub time: TimeRange,
}

impl Filter<KnowledgeManagement> for KnowledgeFilter {
    fn matches(&self, item: &KnowledgeManagement) -> bool {
        self.practice
            .as_deref()
            .is_none_or(|practice| contains_ignore_case(&item.practice, practice))
            && self.category.is_none_or(|category| item.category == category)
            && self.priority.is_none_or(|priority| item.priority == priority)
            && self.time.contains(item)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KnowledgeSort {
    #[default]
    CreatedAt,
    UpdatedAt,
    Practice,
}

impl SortKey<KnowledgeManagement> for KnowledgeSort {
    fn compare(self, a: &KnowledgeManagement, b: &KnowledgeManagement) -> Ordering {
        match self {
            Self::CreatedAt => by_created_at(a, b),
            Self::UpdatedAt => by_updated_at(a, b),
            Self::Practice => a.practice.cmp(&b.practice),
        }
    }
}

pub type KnowledgeSearch = SearchOptions<KnowledgeFilter, KnowledgeSort>;

/// Counts per tag plus the most recently touched entries.
///
/// Every category and priority appears in the maps, zero counts included.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct KnowledgeStatistics {
    pub total_entries: usize,
    pub by_category: IndexMap<KnowledgeCategory, usize>,
    pub by_priority: IndexMap<KnowledgePriority, usize>,
    pub recently_updated: Vec<KnowledgeManagement>,
}

fn validate(practice: &str, description: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if errors.require_text("practice", "Practice", practice) {
        errors.max_chars("practice", "Practice", practice, MAX_PRACTICE_CHARS);
    }
    if errors.require_text("description", "Description", description) {
        errors.max_chars(
            "description",
            "Description",
            description,
            MAX_PRACTICE_DESCRIPTION_CHARS,
        );
    }
    errors.into_result()
}

#[derive(Debug, Clone)]
pub struct KnowledgeService {
    store: MemoryStore<KnowledgeManagement>,
}

impl Default for KnowledgeService {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(PREFIX_KNOWLEDGE),
        }
    }

    pub fn initialize(&mut self) -> usize {
        if self.store.is_seeded() {
            return 0;
        }
        let created = seed_with(ENTITY, seed::knowledge_practices(), |data| {
            self.create_knowledge_entry(data)
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
    /// Returns `StoreError::Validation` if practice is blank or over 100
    /// characters, or description is blank or over 500 characters.
    pub fn create_knowledge_entry(
        &mut self,
        data: CreateKnowledgeEntry,
    ) -> Result<KnowledgeManagement, StoreError> {
        validate(&data.practice, &data.description).map_err(|errors| rejected(ENTITY, errors))?;

        let category = data
            .category
            .unwrap_or_else(|| KnowledgeCategory::infer(&data.practice));
        let priority = data
            .priority
            .unwrap_or_else(|| KnowledgePriority::infer(&data.practice));

        let now = Utc::now();
        let item = KnowledgeManagement {
            id: self.store.next_id(),
            practice: data.practice,
            description: data.description,
            category,
            priority,
            created_at: now,
            updated_at: now,
        };
        debug!(id = %item.id, category = %item.category, priority = %item.priority, "created knowledge entry");
        self.store.insert(item.clone());
        Ok(item)
    }

    #[must_use]
    pub fn get_knowledge_entry(&self, id: &str) -> Option<KnowledgeManagement> {
        self.store.get(id).cloned()
    }

    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the merged record is invalid.
    pub fn update_knowledge_entry(
        &mut self,
        id: &str,
        update: KnowledgeUpdate,
    ) -> Result<Option<KnowledgeManagement>, StoreError> {
        self.store
            .update_with(
                id,
                |item| update.apply(item),
                |item| validate(&item.practice, &item.description),
            )
            .map_err(|errors| rejected(ENTITY, errors))
    }

    pub fn delete_knowledge_entry(&mut self, id: &str) -> bool {
        let removed = self.store.remove(id).is_some();
        if removed {
            debug!(id, "deleted knowledge entry");
        }
        removed
    }

    #[must_use]
    pub fn search_knowledge_entries(&self, options: &KnowledgeSearch) -> Vec<KnowledgeManagement> {
        self.store.search(options)
    }

    #[must_use]
    pub fn list_knowledge_entries(&self) -> Vec<KnowledgeManagement> {
        self.store.to_vec()
    }

    #[must_use]
    pub fn get_knowledge_entries_by_category(
        &self,
        category: KnowledgeCategory,
    ) -> Vec<KnowledgeManagement> {
        self.store
            .values()
            .filter(|item| item.category == category)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn get_knowledge_entries_by_priority(
        &self,
        priority: KnowledgePriority,
    ) -> Vec<KnowledgeManagement> {
        self.store
            .values()
            .filter(|item| item.priority == priority)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn knowledge_statistics(&self) -> KnowledgeStatistics {
        let mut by_category: IndexMap<KnowledgeCategory, usize> =
            KnowledgeCategory::ALL.iter().map(|&c| (c, 0)).collect();
        let mut by_priority: IndexMap<KnowledgePriority, usize> =
            KnowledgePriority::ALL.iter().map(|&p| (p, 0)).collect();

        for item in self.store.values() {
            *by_category.entry(item.category).or_default() += 1;
            *by_priority.entry(item.priority).or_default() += 1;
        }

        let mut recently_updated = self.store.to_vec();
        recently_updated.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        recently_updated.truncate(RECENT_LIMIT);

        KnowledgeStatistics {
            total_entries: self.store.len(),
            by_category,
            by_priority,
            recently_updated,
        }
    }

    #[must_use]
    pub fn validate_knowledge_entry_data(data: &CreateKnowledgeEntry) -> ValidationReport {
        validate(&data.practice, &data.description).into()
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
