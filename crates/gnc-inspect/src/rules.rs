//! Read-only path rules.
//!
//! Paths are classified by pattern alone, relative to the project root with
//! `/` separators. A directory rule covers the directory itself and
//! everything below it; a file rule matches the last path component.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use serde::Serialize;

/// Directories whose contents must never be edited.
pub const READ_ONLY_DIRS: [&str; 6] = [
    "src/components/ui/",
    "node_modules/",
    ".git/",
    "dist/",
    "build/",
    "coverage/",
];

/// Configuration files that must never be edited, wherever they appear.
pub const READ_ONLY_FILES: [&str; 9] = [
    ".gitignore",
    "package.json",
    "package-lock.json",
    "pnpm-lock.yaml",
    "yarn.lock",
    "tsconfig.json",
    "next.config.js",
    "jest.config.js",
    "eslint.config.js",
];

const DIR_REASON: &str = "Path matches read-only directory pattern";
const FILE_REASON: &str = "Configuration file should not be modified";

/// Outcome of classifying one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadOnlyStatus {
    pub is_read_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ReadOnlyStatus {
    const fn writable() -> Self {
        Self {
            is_read_only: false,
            reason: None,
        }
    }

    fn read_only(reason: &str) -> Self {
        Self {
            is_read_only: true,
            reason: Some(reason.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReadOnlyRules {
    dirs: GlobSet,
    files: GlobSet,
}

impl ReadOnlyRules {
    /// Built-in rules plus `extra_dirs` / `extra_files`.
    ///
    /// Directory entries may carry a trailing `/`. File entries may be globs
    /// (e.g. `"*.lock"`).
    ///
    /// # Errors
    ///
    /// Returns `globset::Error` if an entry is not a valid glob.
    pub fn new(extra_dirs: &[String], extra_files: &[String]) -> Result<Self, globset::Error> {
        let mut dirs = GlobSetBuilder::new();
        for dir in READ_ONLY_DIRS.iter().copied().chain(extra_dirs.iter().map(String::as_str)) {
            let dir = dir.trim_end_matches('/');
            dirs.add(GlobBuilder::new(dir).case_insensitive(true).build()?);
            dirs.add(
                GlobBuilder::new(&format!("{dir}/**"))
                    .case_insensitive(true)
                    .build()?,
            );
        }

        let mut files = GlobSetBuilder::new();
        for name in READ_ONLY_FILES.iter().copied().chain(extra_files.iter().map(String::as_str)) {
            files.add(GlobBuilder::new(name).literal_separator(true).build()?);
        }

        Ok(Self {
            dirs: dirs.build()?,
            files: files.build()?,
        })
    }

    /// Classify a root-relative, `/`-separated path.
    #[must_use]
    pub fn classify(&self, relative: &str) -> ReadOnlyStatus {
        let relative = relative.trim_end_matches('/');
        if relative.is_empty() {
            return ReadOnlyStatus::writable();
        }
        if self.dirs.is_match(relative) {
            return ReadOnlyStatus::read_only(DIR_REASON);
        }
        let name = relative.rsplit('/').next().unwrap_or(relative);
        if self.files.is_match(name) {
            return ReadOnlyStatus::read_only(FILE_REASON);
        }
        ReadOnlyStatus::writable()
    }
}
