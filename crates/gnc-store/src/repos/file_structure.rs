//! File structure documentation repository.
//!
//! These records describe the intended layout of the project. They are not
//! tied to the filesystem; see `gnc-inspect` for live classification.

use std::cmp::Ordering;

use chrono::Utc;
use gnc_core::entities::{CreateFileStructure, FileStructure};
use gnc_core::enums::FileType;
use gnc_core::ids::PREFIX_FILE_STRUCTURE;
use gnc_core::search::{
    Filter, SearchOptions, SortKey, TimeRange, by_created_at, by_updated_at, contains_ignore_case,
};
use gnc_core::validation::ValidationErrors;
use tracing::debug;

use crate::error::StoreError;
use crate::repos::{rejected, seed_with};
use crate::seed;
use crate::store::MemoryStore;
use crate::updates::file_structure::FileStructureUpdate;

const ENTITY: &str = "file_structure";

#[derive(Debug, Clone, Default)]
pub struct FileStructureFilter {
    /// Case-insensitive substring of `path`.
    pub path: Option<String>,
    pub file_type: Option<FileType>,
    pub read_only: Option<bool>,
    pub time: TimeRange,
}

impl Filter<FileStructure> for FileStructureFilter {
    fn matches(&self, item: &FileStructure) -> bool {
        self.path
            .as_deref()
            .is_none_or(|path| contains_ignore_case(&item.path, path))
            && self.file_type.is_none_or(|file_type| item.file_type == file_type)
            && self.read_only.is_none_or(|read_only| item.read_only == read_only)
            && self.time.contains(item)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileStructureSort {
    #[default]
    CreatedAt,
    UpdatedAt,
    Path,
    FileType,
}

impl SortKey<FileStructure> for FileStructureSort {
    fn compare(self, a: &FileStructure, b: &FileStructure) -> Ordering {
        match self {
            Self::CreatedAt => by_created_at(a, b),
            Self::UpdatedAt => by_updated_at(a, b),
            Self::Path => a.path.cmp(&b.path),
            Self::FileType => a.file_type.as_str().cmp(b.file_type.as_str()),
        }
    }
}

pub type FileStructureSearch = SearchOptions<FileStructureFilter, FileStructureSort>;

fn validate(path: &str, description: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.require_text("path", "Path", path);
    errors.require_text("description", "Description", description);
    errors.into_result()
}

#[derive(Debug, Clone)]
pub struct FileStructureService {
    store: MemoryStore<FileStructure>,
}

impl Default for FileStructureService {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStructureService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(PREFIX_FILE_STRUCTURE),
        }
    }

    /// Seed the documented project layout once. Later calls return 0.
    pub fn initialize(&mut self) -> usize {
        if self.store.is_seeded() {
            return 0;
        }
        let created = seed_with(ENTITY, seed::file_structures(), |data| {
            self.create_file_structure(data)
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
    /// Returns `StoreError::Validation` if path or description is blank.
    pub fn create_file_structure(
        &mut self,
        data: CreateFileStructure,
    ) -> Result<FileStructure, StoreError> {
        validate(&data.path, &data.description).map_err(|errors| rejected(ENTITY, errors))?;

        let now = Utc::now();
        let item = FileStructure {
            id: self.store.next_id(),
            path: data.path,
            file_type: data.file_type,
            description: data.description,
            read_only: data.read_only,
            created_at: now,
            updated_at: now,
        };
        debug!(id = %item.id, path = %item.path, "created file structure entry");
        self.store.insert(item.clone());
        Ok(item)
    }

    #[must_use]
    pub fn get_file_structure(&self, id: &str) -> Option<FileStructure> {
        self.store.get(id).cloned()
    }

    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the merged record is invalid.
    pub fn update_file_structure(
        &mut self,
        id: &str,
        update: FileStructureUpdate,
    ) -> Result<Option<FileStructure>, StoreError> {
        self.store
            .update_with(
                id,
                |item| update.apply(item),
                |item| validate(&item.path, &item.description),
            )
            .map_err(|errors| rejected(ENTITY, errors))
    }

    pub fn delete_file_structure(&mut self, id: &str) -> bool {
        let removed = self.store.remove(id).is_some();
        if removed {
            debug!(id, "deleted file structure entry");
        }
        removed
    }

    #[must_use]
    pub fn search_file_structures(&self, options: &FileStructureSearch) -> Vec<FileStructure> {
        self.store.search(options)
    }

    #[must_use]
    pub fn list_file_structures(&self) -> Vec<FileStructure> {
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
