//! Error types for tree building.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a tree.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Root path is not a directory.
    #[error("Root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Stat or directory listing failed during traversal.
    #[error("Filesystem error at {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tree has more nodes or levels than a `u32` can index.
    #[error("Tree too large to index at {path}")]
    TooLarge { path: PathBuf },

    /// The background build task did not run to completion.
    #[error("Build interrupted")]
    Interrupted,

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl BuildError {
    /// Create a filesystem error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Underlying I/O error kind, for filesystem errors.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Filesystem { source, .. } => Some(source.kind()),
            _ => None,
        }
    }

    /// Path the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::NotADirectory { path }
            | Self::Filesystem { path, .. }
            | Self::TooLarge { path } => Some(path),
            _ => None,
        }
    }
}
