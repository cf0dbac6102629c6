//! File-structure inspector configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const fn default_max_depth() -> usize {
    3
}

const fn default_auto_expand_depth() -> usize {
    2
}

fn default_required_directories() -> Vec<String> {
    ["src/", "src/components/", "src/lib/", "src/hooks/", "tests/", "notes/"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_required_files() -> Vec<String> {
    ["package.json", "tsconfig.json", "jest.config.mjs"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InspectorConfig {
    /// Project root. Empty means the current working directory.
    #[serde(default)]
    pub root: String,

    /// Default depth limit for directory trees.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Tree nodes shallower than this are marked expanded.
    #[serde(default = "default_auto_expand_depth")]
    pub auto_expand_depth: usize,

    /// Project-relative directories treated as read-only in addition to the
    /// built-in list (e.g. `"vendor/"`).
    #[serde(default)]
    pub extra_read_only_dirs: Vec<String>,

    /// File names treated as read-only in addition to the built-in list.
    #[serde(default)]
    pub extra_read_only_files: Vec<String>,

    /// Directories a well-formed project must contain.
    #[serde(default = "default_required_directories")]
    pub required_directories: Vec<String>,

    /// Files a well-formed project must contain.
    #[serde(default = "default_required_files")]
    pub required_files: Vec<String>,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            root: String::new(),
            max_depth: default_max_depth(),
            auto_expand_depth: default_auto_expand_depth(),
            extra_read_only_dirs: Vec::new(),
            extra_read_only_files: Vec::new(),
            required_directories: default_required_directories(),
            required_files: default_required_files(),
        }
    }
}

impl InspectorConfig {
    /// Resolve `root`, falling back to `cwd` when unset.
    #[must_use]
    pub fn root_or(&self, cwd: PathBuf) -> PathBuf {
        if self.root.is_empty() {
            cwd
        } else {
            PathBuf::from(&self.root)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = InspectorConfig::default();
        assert!(config.root.is_empty());
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.auto_expand_depth, 2);
        assert!(config.extra_read_only_dirs.is_empty());
        assert!(config.required_directories.contains(&"notes/".to_string()));
        assert!(config.required_files.contains(&"package.json".to_string()));
    }

    #[test]
    fn empty_root_falls_back_to_cwd() {
        let config = InspectorConfig::default();
        assert_eq!(config.root_or(PathBuf::from("/work")), PathBuf::from("/work"));

        let config = InspectorConfig {
            root: "/srv/site".into(),
            ..InspectorConfig::default()
        };
        assert_eq!(config.root_or(PathBuf::from("/work")), PathBuf::from("/srv/site"));
    }
}
