//! Build configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::BuildError;

/// Name of the ignore file looked up in the build root.
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// Version-control metadata directory added to a successfully loaded ignore list.
pub const DEFAULT_VCS_DIR: &str = ".git";

/// Configuration for building a tree.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct BuildConfig {
    /// Root directory to build from.
    pub root: PathBuf,

    /// Ignore file read from the root directory.
    #[builder(default = "DEFAULT_IGNORE_FILE.to_string()")]
    #[serde(default = "default_ignore_file")]
    pub ignore_file: String,

    /// Metadata directory appended when the ignore file loads.
    #[builder(default = "DEFAULT_VCS_DIR.to_string()")]
    #[serde(default = "default_vcs_dir")]
    pub vcs_dir: String,

    /// Stat through symbolic links.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub follow_symlinks: bool,

    /// Names ignored whether or not the ignore file loads.
    #[builder(default)]
    #[serde(default)]
    pub extra_ignores: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_ignore_file() -> String {
    DEFAULT_IGNORE_FILE.to_string()
}

fn default_vcs_dir() -> String {
    DEFAULT_VCS_DIR.to_string()
}

impl BuildConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        if let Some(ref name) = self.ignore_file {
            if name.is_empty() {
                return Err("Ignore file name cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

impl From<BuildConfigBuilderError> for BuildError {
    fn from(err: BuildConfigBuilderError) -> Self {
        BuildError::InvalidConfig {
            message: err.to_string(),
        }
    }
}

impl BuildConfig {
    /// Create a new build config builder.
    pub fn builder() -> BuildConfigBuilder {
        BuildConfigBuilder::default()
    }

    /// Create a config with default settings for a root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignore_file: default_ignore_file(),
            vcs_dir: default_vcs_dir(),
            follow_symlinks: true,
            extra_ignores: Vec::new(),
        }
    }

    /// Path of the ignore file for this root.
    pub fn ignore_file_path(&self) -> PathBuf {
        self.root.join(&self.ignore_file)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
