//! Learning strategy repository.
//!
//! Besides CRUD this exposes the lookups an agent uses to pick a strategy:
//! exact goal lookup, step-count ranges, recency, statistics and a
//! topic-based recommendation.

use std::cmp::Ordering;

use chrono::Utc;
use indexmap::IndexMap;
use serde::Serialize;

use gnc_core::entities::{CreateLearningStrategy, LearningStrategy};
use gnc_core::ids::PREFIX_LEARNING_STRATEGY;
use gnc_core::search::{
    Filter, SearchOptions, SortKey, TimeRange, by_created_at, by_updated_at, contains_ignore_case,
};
use gnc_core::validation::{
    MAX_GOAL_CHARS, MAX_STEP_CHARS, MAX_STEPS, ValidationErrors, ValidationReport, is_blank,
};
use tracing::debug;

use crate::error::StoreError;
use crate::repos::{rejected, seed_with};
use crate::seed;
use crate::store::MemoryStore;
use crate::updates::learning_strategy::LearningStrategyUpdate;

const ENTITY: &str = "learning_strategy";

/// Entries listed in each "recent" and "most common" statistic.
const STATS_TOP_N: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct LearningStrategyFilter {
    /// Case-insensitive substring of `goal`.
    pub goal: Option<String>,
    pub time: TimeRange,
}

impl Filter<LearningStrategy> for LearningStrategyFilter {
    fn matches(&self, item: &LearningStrategy) -> bool {
        self.goal
            .as_deref()
            .is_none_or(|goal| contains_ignore_case(&item.goal, goal))
            && self.time.contains(item)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LearningStrategySort {
    #[default]
    CreatedAt,
    UpdatedAt,
    Goal,
}

impl SortKey<LearningStrategy> for LearningStrategySort {
    fn compare(self, a: &LearningStrategy, b: &LearningStrategy) -> Ordering {
        match self {
            Self::CreatedAt => by_created_at(a, b),
            Self::UpdatedAt => by_updated_at(a, b),
            Self::Goal => a.goal.cmp(&b.goal),
        }
    }
}

pub type LearningStrategySearch = SearchOptions<LearningStrategyFilter, LearningStrategySort>;

/// Aggregate view over all strategies.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct LearningStrategyStatistics {
    pub total_strategies: usize,
    pub average_steps: f64,
    /// Up to five goals, most frequent first. Ties keep first-seen order.
    pub most_common_goals: Vec<String>,
    pub recently_created: Vec<LearningStrategy>,
    pub recently_updated: Vec<LearningStrategy>,
}

fn validate(goal: &str, steps: &[String]) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if errors.require_text("goal", "Goal", goal) {
        errors.max_chars("goal", "Goal", goal, MAX_GOAL_CHARS);
    }

    if steps.is_empty() {
        errors.push("steps", "At least one step is required");
    } else if steps.len() > MAX_STEPS {
        errors.push("steps", format!("Maximum {MAX_STEPS} steps allowed"));
    }

    for (index, step) in steps.iter().enumerate() {
        let field = format!("steps[{index}]");
        let label = format!("Step {}", index + 1);
        if is_blank(step) {
            errors.push(field, format!("{label} cannot be empty"));
        } else {
            errors.max_chars(&field, &label, step, MAX_STEP_CHARS);
        }
    }
    errors.into_result()
}

/// Most recent first by `key`, stable on ties, at most `limit` entries.
fn most_recent(
    mut items: Vec<LearningStrategy>,
    key: LearningStrategySort,
    limit: usize,
) -> Vec<LearningStrategy> {
    items.sort_by(|a, b| key.compare(b, a));
    items.truncate(limit);
    items
}

#[derive(Debug, Clone)]
pub struct LearningStrategyService {
    store: MemoryStore<LearningStrategy>,
}

impl Default for LearningStrategyService {
    fn default() -> Self {
        Self::new()
    }
}

impl LearningStrategyService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(PREFIX_LEARNING_STRATEGY),
        }
    }

    pub fn initialize(&mut self) -> usize {
        if self.store.is_seeded() {
            return 0;
        }
        let created = seed_with(ENTITY, seed::learning_strategies(), |data| {
            self.create_learning_strategy(data)
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
    /// Returns `StoreError::Validation` listing every failed rule: blank or
    /// overlong goal, no steps, more than 20 steps, blank or overlong step.
    pub fn create_learning_strategy(
        &mut self,
        data: CreateLearningStrategy,
    ) -> Result<LearningStrategy, StoreError> {
        validate(&data.goal, &data.steps).map_err(|errors| rejected(ENTITY, errors))?;

        let now = Utc::now();
        let item = LearningStrategy {
            id: self.store.next_id(),
            goal: data.goal,
            steps: data.steps,
            created_at: now,
            updated_at: now,
        };
        debug!(id = %item.id, steps = item.steps.len(), "created learning strategy");
        self.store.insert(item.clone());
        Ok(item)
    }

    #[must_use]
    pub fn get_learning_strategy(&self, id: &str) -> Option<LearningStrategy> {
        self.store.get(id).cloned()
    }

    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the merged record is invalid.
    pub fn update_learning_strategy(
        &mut self,
        id: &str,
        update: LearningStrategyUpdate,
    ) -> Result<Option<LearningStrategy>, StoreError> {
        self.store
            .update_with(
                id,
                |item| update.apply(item),
                |item| validate(&item.goal, &item.steps),
            )
            .map_err(|errors| rejected(ENTITY, errors))
    }

    pub fn delete_learning_strategy(&mut self, id: &str) -> bool {
        let removed = self.store.remove(id).is_some();
        if removed {
            debug!(id, "deleted learning strategy");
        }
        removed
    }

    #[must_use]
    pub fn search_learning_strategies(
        &self,
        options: &LearningStrategySearch,
    ) -> Vec<LearningStrategy> {
        self.store.search(options)
    }

    #[must_use]
    pub fn list_learning_strategies(&self) -> Vec<LearningStrategy> {
        self.store.to_vec()
    }

    /// First strategy whose goal equals `goal`, ignoring case.
    #[must_use]
    pub fn get_learning_strategy_by_goal(&self, goal: &str) -> Option<LearningStrategy> {
        let goal = goal.to_lowercase();
        self.store
            .values()
            .find(|item| item.goal.to_lowercase() == goal)
            .cloned()
    }

    /// Strategies with `min..=max` steps, in insertion order.
    #[must_use]
    pub fn get_learning_strategies_by_step_count(
        &self,
        min: usize,
        max: usize,
    ) -> Vec<LearningStrategy> {
        self.store
            .values()
            .filter(|item| (min..=max).contains(&item.steps.len()))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn get_recently_updated_strategies(&self, limit: usize) -> Vec<LearningStrategy> {
        most_recent(self.store.to_vec(), LearningStrategySort::UpdatedAt, limit)
    }

    #[must_use]
    pub fn learning_strategy_statistics(&self) -> LearningStrategyStatistics {
        let all = self.store.to_vec();
        if all.is_empty() {
            return LearningStrategyStatistics::default();
        }

        let total_steps: usize = all.iter().map(|item| item.steps.len()).sum();
        #[allow(clippy::cast_precision_loss)]
        let average_steps = total_steps as f64 / all.len() as f64;

        let mut goal_counts: IndexMap<&str, usize> = IndexMap::new();
        for item in &all {
            *goal_counts.entry(item.goal.as_str()).or_default() += 1;
        }
        let mut ranked: Vec<(&str, usize)> = goal_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        let most_common_goals = ranked
            .into_iter()
            .take(STATS_TOP_N)
            .map(|(goal, _)| goal.to_string())
            .collect();

        LearningStrategyStatistics {
            total_strategies: all.len(),
            average_steps,
            most_common_goals,
            recently_created: most_recent(all.clone(), LearningStrategySort::CreatedAt, STATS_TOP_N),
            recently_updated: most_recent(all, LearningStrategySort::UpdatedAt, STATS_TOP_N),
        }
    }

    /// Check a create payload without storing it.
    #[must_use]
    pub fn validate_learning_strategy_data(data: &CreateLearningStrategy) -> ValidationReport {
        validate(&data.goal, &data.steps).into()
    }

    /// Pick a strategy for `topic`.
    ///
    /// Strategies whose goal or any step mentions `topic` win, most recently
    /// updated first. Otherwise the first general strategy (goal mentions
    /// "learn" or "understand"), otherwise the first strategy at all.
    #[must_use]
    pub fn get_recommended_strategy(&self, topic: &str) -> Option<LearningStrategy> {
        let matching: Vec<LearningStrategy> = self
            .store
            .values()
            .filter(|item| {
                contains_ignore_case(&item.goal, topic)
                    || item.steps.iter().any(|step| contains_ignore_case(step, topic))
            })
            .cloned()
            .collect();
        if let Some(best) = most_recent(matching, LearningStrategySort::UpdatedAt, 1).pop() {
            return Some(best);
        }

        self.store
            .values()
            .find(|item| {
                contains_ignore_case(&item.goal, "learn")
                    || contains_ignore_case(&item.goal, "understand")
            })
            .or_else(|| self.store.values().next())
            .cloned()
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
