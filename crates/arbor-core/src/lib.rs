//! Core types for arbor.
//!
//! This crate provides the data structures shared by the arbor workspace:
//! tree nodes stored in an arena, the tree container, the ignore set,
//! build configuration and the error taxonomy.

mod config;
mod error;
mod ignore;
mod node;
mod tree;

pub use config::{BuildConfig, BuildConfigBuilder, DEFAULT_IGNORE_FILE, DEFAULT_VCS_DIR};
pub use error::BuildError;
pub use ignore::IgnoreSet;
pub use node::{NodeId, NodeKind, TreeNode};
pub use tree::{Ancestors, DirTree, TreeStats};
