//! Inspector error types for gnc-inspect.

use std::path::PathBuf;

/// Errors from filesystem inspection.
///
/// A path that does not exist is not an error for single-path lookups
/// (they return `None`); it is one for tree building, which needs a root.
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    /// The filesystem refused a stat or directory listing.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory {0} does not exist")]
    NotFound(PathBuf),

    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    /// The directory walker failed to read an entry.
    #[error("walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// A configured read-only pattern is not a valid glob.
    #[error("invalid read-only pattern: {0}")]
    Pattern(#[from] globset::Error),
}

impl InspectError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
