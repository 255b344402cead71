//! Directory tree building for arbor.
//!
//! This crate walks a directory and builds an arena-backed [`DirTree`].
//!
//! # Overview
//!
//! `arbor-scan` has two parts:
//!
//! - **Ignore loading**: reads the root's `.gitignore` as a list of literal
//!   basenames, plus `.git` when the file loads.
//! - **Tree building**: a single-threaded recursive walk that materializes
//!   ignored directories as childless nodes instead of descending into them.
//!
//! # Example
//!
//! ```rust,no_run
//! use arbor_scan::{BuildConfig, TreeBuilder};
//!
//! let config = BuildConfig::new("/path/to/project");
//! let tree = TreeBuilder::new().build(&config).unwrap();
//!
//! println!("{} files, {} directories", tree.total_files(), tree.total_dirs());
//! for node in tree.children(tree.root_id()) {
//!     println!("{}", node.name);
//! }
//! ```
//!
//! # Async
//!
//! The build can be awaited from a tokio runtime; it runs on the blocking
//! pool and never yields mid-walk:
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), arbor_scan::BuildError> {
//! use arbor_scan::{BuildConfig, TreeBuilder};
//!
//! let tree = TreeBuilder::new().build_async(BuildConfig::new(".")).await?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod ignore;

use std::path::Path;

pub use builder::TreeBuilder;
pub use ignore::{load_ignore_file, load_ignore_list};

// Re-export core types for convenience
pub use arbor_core::{
    BuildConfig, BuildConfigBuilder, BuildError, DirTree, IgnoreSet, NodeId, NodeKind, TreeNode,
    TreeStats,
};

/// Build a tree for `root` with default settings.
pub fn build(root: impl AsRef<Path>) -> Result<DirTree, BuildError> {
    TreeBuilder::new().build(&BuildConfig::new(root.as_ref()))
}
