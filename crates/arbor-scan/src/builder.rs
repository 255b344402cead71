//! Recursive directory tree builder.

use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::Instant;

use arbor_core::{BuildConfig, BuildError, DirTree, IgnoreSet, NodeId, TreeNode, TreeStats};
use tracing::{debug, trace, warn};

use crate::ignore::load_ignore_file;

/// Builds a [`DirTree`] by walking a directory depth-first.
///
/// Each call to [`build`](Self::build) owns its own traversal state, so one
/// builder can serve any number of concurrent builds.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    ignore: Option<IgnoreSet>,
}

impl TreeBuilder {
    /// Create a builder that loads the ignore list from each root.
    pub fn new() -> Self {
        Self { ignore: None }
    }

    /// Use a fixed ignore set instead of loading one from the root.
    pub fn with_ignore_set(mut self, ignore: IgnoreSet) -> Self {
        self.ignore = Some(ignore);
        self
    }

    /// Build the tree rooted at `config.root`.
    pub fn build(&self, config: &BuildConfig) -> Result<DirTree, BuildError> {
        let start = Instant::now();
        let root = config.root.as_path();

        // Verify root is a directory
        let metadata = std::fs::metadata(root).map_err(|e| BuildError::io(root, e))?;
        if !metadata.is_dir() {
            return Err(BuildError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut ignore = match &self.ignore {
            Some(set) => set.clone(),
            None => load_ignore_file(root, &config.ignore_file, &config.vcs_dir),
        };
        ignore.extend(config.extra_ignores.iter().cloned());

        let mut traversal = Traversal::new(&ignore, config.follow_symlinks);
        traversal.visit_dir(root)?;
        debug_assert!(traversal.stack.is_empty());
        debug_assert!(traversal.current_parent.is_none());

        let Traversal { nodes, stats, .. } = traversal;
        let build_duration = start.elapsed();

        debug!(
            root = %root.display(),
            files = stats.total_files,
            dirs = stats.total_dirs,
            ignored = stats.ignored_dirs,
            elapsed_ms = build_duration.as_millis() as u64,
            "built tree"
        );

        Ok(DirTree::new(nodes, config.clone(), ignore, stats, build_duration))
    }

    /// Build the tree on tokio's blocking pool and await the result.
    pub async fn build_async(&self, config: BuildConfig) -> Result<DirTree, BuildError> {
        let builder = self.clone();
        tokio::task::spawn_blocking(move || builder.build(&config))
            .await
            .map_err(|err| {
                warn!(error = %err, "build task did not complete");
                BuildError::Interrupted
            })?
    }
}

/// Per-build traversal state.
struct Traversal<'a> {
    ignore: &'a IgnoreSet,
    follow_symlinks: bool,
    nodes: Vec<TreeNode>,
    /// Non-ignored directories currently being expanded, root first.
    stack: Vec<NodeId>,
    /// Node most recently made active; the parent given to new directories.
    current_parent: Option<NodeId>,
    stats: TreeStats,
}

impl<'a> Traversal<'a> {
    fn new(ignore: &'a IgnoreSet, follow_symlinks: bool) -> Self {
        Self {
            ignore,
            follow_symlinks,
            nodes: Vec::new(),
            stack: Vec::new(),
            current_parent: None,
            stats: TreeStats::new(),
        }
    }

    fn next_id(&self, path: &Path) -> Result<NodeId, BuildError> {
        NodeId::from_index(self.nodes.len()).ok_or_else(|| too_large(path))
    }

    fn depth(&self, path: &Path) -> Result<u32, BuildError> {
        u32::try_from(self.stack.len()).map_err(|_| too_large(path))
    }

    /// Create the node for a directory and, unless it is ignored, its subtree.
    fn visit_dir(&mut self, path: &Path) -> Result<NodeId, BuildError> {
        let id = self.next_id(path)?;
        let depth = self.depth(path)?;
        let mut node = TreeNode::new_directory(id, path, depth, self.current_parent);
        self.stats.record_dir(depth);

        let name = path.file_name().unwrap_or(path.as_os_str());
        if self.ignore.matches(name) {
            self.current_parent = self.stack.last().copied();
            node.parent = self.current_parent;
            node.ignored = true;
            self.stats.record_ignored();
            self.nodes.push(node);
            trace!(path = %path.display(), depth, "skipped ignored directory");
            return Ok(id);
        }

        self.nodes.push(node);
        self.stack.push(id);
        self.current_parent = Some(id);
        trace!(path = %path.display(), depth, "expanding directory");

        let entries = std::fs::read_dir(path).map_err(|e| BuildError::io(path, e))?;
        let mut children = Vec::new();
        for entry in entries {
            let entry_path = entry.map_err(|e| BuildError::io(path, e))?.path();
            let child = if self.stat(&entry_path)?.is_dir() {
                self.visit_dir(&entry_path)?
            } else {
                self.visit_file(entry_path, id)?
            };
            children.push(child);
        }

        self.stack.pop();
        self.current_parent = self.stack.last().copied();
        self.nodes[id.index()].children = children;

        Ok(id)
    }

    fn visit_file(&mut self, path: PathBuf, parent: NodeId) -> Result<NodeId, BuildError> {
        let id = self.next_id(&path)?;
        let depth = self.depth(&path)?;
        self.nodes.push(TreeNode::new_file(id, path, depth, parent));
        self.stats.record_file(depth);
        Ok(id)
    }

    fn stat(&self, path: &Path) -> Result<Metadata, BuildError> {
        let metadata = if self.follow_symlinks {
            std::fs::metadata(path)
        } else {
            std::fs::symlink_metadata(path)
        };
        metadata.map_err(|e| BuildError::io(path, e))
    }
}

fn too_large(path: &Path) -> BuildError {
    BuildError::TooLarge {
        path: path.to_path_buf(),
    }
}
