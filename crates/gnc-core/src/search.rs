//! Filter → stable sort → offset/limit, shared by every repository.
//!
//! Repositories hand their values to [`apply_search`] in insertion order.
//! Sorting uses `slice::sort_by`, which is stable, and a comparator that
//! returns `Equal` for equal keys in both directions, so ties always keep
//! insertion order.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default page size for searches.
pub const DEFAULT_LIMIT: usize = 50;

/// Entities carrying creation and last-update timestamps.
pub trait Timestamped {
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
}

/// A predicate over entities of type `T`.
pub trait Filter<T> {
    fn matches(&self, item: &T) -> bool;
}

/// The empty filter matches everything.
impl<T> Filter<T> for () {
    fn matches(&self, _item: &T) -> bool {
        true
    }
}

/// A sortable field of `T`. Implementations compare ascending.
pub trait SortKey<T>: Copy {
    fn compare(self, a: &T, b: &T) -> Ordering;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Inclusive bounds on `created_at` / `updated_at`. Unset bounds are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub updated_after: Option<DateTime<Utc>>,
    pub updated_before: Option<DateTime<Utc>>,
}

impl TimeRange {
    #[must_use]
    pub fn contains<T: Timestamped>(&self, item: &T) -> bool {
        let created = item.created_at();
        let updated = item.updated_at();
        self.created_after.is_none_or(|bound| created >= bound)
            && self.created_before.is_none_or(|bound| created <= bound)
            && self.updated_after.is_none_or(|bound| updated >= bound)
            && self.updated_before.is_none_or(|bound| updated <= bound)
    }
}

/// Search request for one repository.
///
/// `F` is the repository's filter type, `S` its sort field enum.
#[derive(Debug, Clone)]
pub struct SearchOptions<F, S> {
    pub filters: F,
    pub order_by: S,
    pub direction: SortDirection,
    pub limit: usize,
    pub offset: usize,
}

impl<F: Default, S: Default> Default for SearchOptions<F, S> {
    fn default() -> Self {
        Self {
            filters: F::default(),
            order_by: S::default(),
            direction: SortDirection::default(),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl<F: Default, S: Default> SearchOptions<F, S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F, S> SearchOptions<F, S> {
    #[must_use]
    pub fn filters(mut self, filters: F) -> Self {
        self.filters = filters;
        self
    }

    #[must_use]
    pub fn order_by(mut self, field: S, direction: SortDirection) -> Self {
        self.order_by = field;
        self.direction = direction;
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub const fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

/// Filter, stably sort and paginate `items`.
///
/// The result length is `min(limit, max(0, matched - offset))`.
pub fn apply_search<'a, T, F, S>(
    items: impl IntoIterator<Item = &'a T>,
    options: &SearchOptions<F, S>,
) -> Vec<T>
where
    T: Clone + 'a,
    F: Filter<T>,
    S: SortKey<T>,
{
    let mut matched: Vec<&T> = items
        .into_iter()
        .filter(|item| options.filters.matches(item))
        .collect();

    let key = options.order_by;
    let direction = options.direction;
    matched.sort_by(|a, b| direction.apply(key.compare(a, b)));

    matched
        .into_iter()
        .skip(options.offset)
        .take(options.limit)
        .cloned()
        .collect()
}

/// Case-insensitive substring match. An empty needle matches everything.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Ascending comparison on `created_at`.
pub fn by_created_at<T: Timestamped>(a: &T, b: &T) -> Ordering {
    a.created_at().cmp(&b.created_at())
}

/// Ascending comparison on `updated_at`.
pub fn by_updated_at<T: Timestamped>(a: &T, b: &T) -> Ordering {
    a.updated_at().cmp(&b.updated_at())
}
