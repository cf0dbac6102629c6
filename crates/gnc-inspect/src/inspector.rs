//! Filesystem inspector rooted at a project checkout.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Utc};
use ignore::WalkBuilder;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use gnc_config::InspectorConfig;
use gnc_core::entities::{FileStructure, FileStructureNode};
use gnc_core::enums::FileType;
use gnc_core::ids::{IdGenerator, PREFIX_FILE_STRUCTURE};

use crate::describe::describe;
use crate::error::InspectError;
use crate::rules::{ReadOnlyRules, ReadOnlyStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub size: usize,
    /// Cached absolute paths in the order they were first inspected.
    pub keys: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureReport {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Resolve `.` and `..` without touching the filesystem.
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Root-relative `/`-separated form of a cleaned absolute path, or the
/// absolute form when it lies outside `root`.
fn relative_to(root: &Path, absolute: &Path) -> String {
    absolute
        .strip_prefix(root)
        .map_or_else(|_| to_slash(absolute), to_slash)
}

/// Directories first, then files, each alphabetical by path.
fn sort_nodes(nodes: &mut [FileStructureNode]) {
    nodes.sort_by(|a, b| {
        b.entry
            .file_type
            .is_directory()
            .cmp(&a.entry.file_type.is_directory())
            .then_with(|| a.entry.path.cmp(&b.entry.path))
    });
}

/// Inspects real paths under a project root.
///
/// Results of [`Self::get_file_structure`] are cached by absolute path and
/// never invalidated automatically; call [`Self::clear_cache`] after the
/// tree changes on disk.
#[derive(Debug)]
pub struct FileStructureInspector {
    root: PathBuf,
    rules: ReadOnlyRules,
    cache: IndexMap<PathBuf, FileStructure>,
    ids: IdGenerator,
    max_depth: usize,
    auto_expand_depth: usize,
    required_directories: Vec<String>,
    required_files: Vec<String>,
}

impl FileStructureInspector {
    /// Inspector with the default rules rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns `InspectError::Io` if a relative `root` cannot be made absolute.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, InspectError> {
        Self::with_config(root, &InspectorConfig::default())
    }

    /// # Errors
    ///
    /// Returns `InspectError::Pattern` if a configured read-only entry is not
    /// a valid glob, or `InspectError::Io` if `root` cannot be made absolute.
    pub fn with_config(root: impl AsRef<Path>, config: &InspectorConfig) -> Result<Self, InspectError> {
        let root = root.as_ref();
        let absolute = std::path::absolute(root).map_err(|e| InspectError::io(root, e))?;
        Ok(Self {
            root: clean(&absolute),
            rules: ReadOnlyRules::new(&config.extra_read_only_dirs, &config.extra_read_only_files)?,
            cache: IndexMap::new(),
            ids: IdGenerator::new(PREFIX_FILE_STRUCTURE),
            max_depth: config.max_depth,
            auto_expand_depth: config.auto_expand_depth,
            required_directories: config.required_directories.clone(),
            required_files: config.required_files.clone(),
        })
    }

    /// Inspector rooted at `config.root`, or at `cwd` when that is unset.
    ///
    /// # Errors
    ///
    /// See [`Self::with_config`].
    pub fn from_config(config: &InspectorConfig, cwd: PathBuf) -> Result<Self, InspectError> {
        Self::with_config(config.root_or(cwd), config)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Configured default depth for [`Self::get_directory_tree`].
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            clean(path)
        } else {
            clean(&self.root.join(path))
        }
    }

    /// Root-relative `/`-separated form of `path`, or the absolute form when
    /// `path` lies outside the root.
    fn relative(&self, path: &Path) -> String {
        relative_to(&self.root, &self.absolute(path))
    }

    /// Classify `path` as read-only or writable.
    ///
    /// Classification is by pattern only; `path` does not need to exist.
    #[must_use]
    pub fn validate_read_only_status(&self, path: impl AsRef<Path>) -> ReadOnlyStatus {
        self.rules.classify(&self.relative(path.as_ref()))
    }

    /// Stat `path` and describe it, or `None` if nothing exists there.
    ///
    /// # Errors
    ///
    /// Returns `InspectError::Io` if the path exists but cannot be stat'ed.
    pub fn get_file_structure(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<Option<FileStructure>, InspectError> {
        let absolute = self.absolute(path.as_ref());
        if let Some(cached) = self.cache.get(&absolute) {
            debug!(path = %absolute.display(), "file structure cache hit");
            return Ok(Some(cached.clone()));
        }

        let metadata = match fs::metadata(&absolute) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(InspectError::io(absolute, e)),
        };

        let file_type = if metadata.is_dir() {
            FileType::Directory
        } else {
            FileType::File
        };
        let relative = self.relative(&absolute);
        let name = absolute
            .file_name()
            .map_or_else(|| relative.clone(), |n| n.to_string_lossy().into_owned());

        let modified: DateTime<Utc> = metadata
            .modified()
            .map_err(|e| InspectError::io(&absolute, e))?
            .into();
        let created: DateTime<Utc> = metadata.created().map_or(modified, DateTime::from);

        let structure = FileStructure {
            id: self.ids.next_id(),
            description: describe(&name, file_type.is_directory()),
            read_only: self.rules.classify(&relative).is_read_only,
            path: relative,
            file_type,
            created_at: created.min(modified),
            updated_at: modified,
        };

        self.cache.insert(absolute, structure.clone());
        Ok(Some(structure))
    }

    /// Tree of everything under `path`, at most `max_depth` levels deep.
    ///
    /// Hidden and git-ignored entries are listed. Symbolic links are listed
    /// but never followed. Read-only directories appear as leaves. Within
    /// each level directories come first, then files, each alphabetical by
    /// path.
    ///
    /// # Errors
    ///
    /// Returns `InspectError::NotFound` if `path` does not exist,
    /// `InspectError::NotADirectory` if it is a file, `InspectError::Walk`
    /// if listing a directory fails, or `InspectError::Io` if an entry
    /// cannot be stat'ed.
    pub fn get_directory_tree(
        &mut self,
        path: impl AsRef<Path>,
        max_depth: usize,
    ) -> Result<Vec<FileStructureNode>, InspectError> {
        let absolute = self.absolute(path.as_ref());
        match self.get_file_structure(&absolute)? {
            None => Err(InspectError::NotFound(absolute)),
            Some(root) if !root.file_type.is_directory() => {
                Err(InspectError::NotADirectory(absolute))
            }
            Some(_) => {
                debug!(path = %absolute.display(), max_depth, "building directory tree");
                self.walk_tree(&absolute, max_depth)
            }
        }
    }

    fn walk_tree(
        &mut self,
        dir: &Path,
        max_depth: usize,
    ) -> Result<Vec<FileStructureNode>, InspectError> {
        let root = self.root.clone();
        let rules = self.rules.clone();
        let walker = WalkBuilder::new(dir)
            .standard_filters(false)
            .hidden(false)
            .follow_links(false)
            .max_depth(Some(max_depth))
            // Entries inside a read-only directory are skipped, so read-only
            // directories below the tree root end up as leaves.
            .filter_entry(move |entry| {
                entry.depth() <= 1
                    || entry
                        .path()
                        .parent()
                        .is_none_or(|parent| !rules.classify(&relative_to(&root, parent)).is_read_only)
            })
            .build();

        let mut entries = Vec::new();
        for entry in walker {
            let entry = entry?;
            let depth = entry.depth();
            if depth == 0 {
                continue;
            }
            let path = entry.into_path();
            // Removed between listing and stat.
            let Some(structure) = self.get_file_structure(&path)? else {
                continue;
            };
            entries.push((path, depth - 1, structure));
        }

        // Deepest first, so every node's children are complete before the
        // node itself is attached to its parent.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        let mut children: IndexMap<PathBuf, Vec<FileStructureNode>> = IndexMap::new();
        for (path, depth, entry) in entries {
            let mut nodes = children.shift_remove(&path).unwrap_or_default();
            sort_nodes(&mut nodes);
            let parent = path.parent().map(Path::to_path_buf).unwrap_or_default();
            children.entry(parent).or_default().push(FileStructureNode {
                entry,
                children: nodes,
                depth,
                expanded: depth < self.auto_expand_depth,
            });
        }

        let mut nodes = children.shift_remove(dir).unwrap_or_default();
        sort_nodes(&mut nodes);
        Ok(nodes)
    }

    /// Check the root for the configured required directories and files.
    #[must_use]
    pub fn validate_project_structure(&self) -> StructureReport {
        let mut issues = Vec::new();
        let mut recommendations = Vec::new();

        for dir in &self.required_directories {
            if !self.root.join(dir).is_dir() {
                issues.push(format!("Missing required directory: {dir}"));
                recommendations.push(format!("Create directory: {dir}"));
            }
        }

        for file in &self.required_files {
            if !self.root.join(file).is_file() {
                issues.push(format!("Missing configuration file: {file}"));
            }
        }

        StructureReport {
            is_valid: issues.is_empty(),
            issues,
            recommendations,
        }
    }

    pub fn clear_cache(&mut self) {
        debug!(entries = self.cache.len(), "clearing file structure cache");
        self.cache.clear();
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            size: self.cache.len(),
            keys: self.cache.keys().map(|k| to_slash(k)).collect(),
        }
    }
}
