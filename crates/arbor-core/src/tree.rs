//! Directory tree container and statistics.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::BuildConfig;
use crate::ignore::IgnoreSet;
use crate::node::{NodeId, TreeNode};

/// Summary statistics for a built tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Number of file nodes.
    pub total_files: u64,
    /// Number of directory nodes, root and ignored directories included.
    pub total_dirs: u64,
    /// Number of directories left unexpanded because they are ignored.
    pub ignored_dirs: u64,
    /// Deepest node depth.
    pub max_depth: u32,
}

impl TreeStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file node.
    pub fn record_file(&mut self, depth: u32) {
        self.total_files += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Record a directory node.
    pub fn record_dir(&mut self, depth: u32) {
        self.total_dirs += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Record that a directory was ignored.
    pub fn record_ignored(&mut self) {
        self.ignored_dirs += 1;
    }

    /// Total node count.
    pub fn total_nodes(&self) -> u64 {
        self.total_files + self.total_dirs
    }
}

/// Complete directory tree with build metadata.
///
/// The tree owns every node in a flat arena. Nodes refer to each other by
/// [`NodeId`], and the arena order is the pre-order in which nodes were
/// created, so the root is always the first slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirTree {
    /// All nodes, indexed by `NodeId`.
    #[serde(deserialize_with = "non_empty_nodes")]
    nodes: Vec<TreeNode>,

    /// Root path the tree was built from.
    pub root_path: PathBuf,

    /// When this tree was built.
    pub built_at: DateTime<Utc>,

    /// Duration of the build.
    pub build_duration: Duration,

    /// Configuration used for the build.
    pub config: BuildConfig,

    /// Names that were treated as ignored.
    pub ignore_list: IgnoreSet,

    /// Summary statistics.
    pub stats: TreeStats,
}

impl DirTree {
    /// Create a new tree from an arena whose first node is the root.
    ///
    /// # Panics
    ///
    /// Panics if `nodes` is empty.
    pub fn new(
        nodes: Vec<TreeNode>,
        config: BuildConfig,
        ignore_list: IgnoreSet,
        stats: TreeStats,
        build_duration: Duration,
    ) -> Self {
        assert!(!nodes.is_empty(), "a tree always has a root node");
        Self {
            nodes,
            root_path: config.root.clone(),
            built_at: Utc::now(),
            build_duration,
            config,
            ignore_list,
            stats,
        }
    }

    /// Id of the root node.
    pub fn root_id(&self) -> NodeId {
        NodeId::new(0)
    }

    /// The root node.
    pub fn root(&self) -> &TreeNode {
        &self.nodes[0]
    }

    /// Look up a node by id.
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.index())
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Direct children of a node, in listing order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &TreeNode> {
        self.get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|child| self.get(*child))
    }

    /// Effective parent of a node.
    pub fn parent(&self, id: NodeId) -> Option<&TreeNode> {
        self.get(id)?.parent.and_then(|parent| self.get(parent))
    }

    /// Walk parent links from a node up to the root, excluding the node itself.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.get(id).and_then(|node| node.parent),
        }
    }

    /// All nodes in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter()
    }

    /// Find the node created for a path.
    pub fn find(&self, path: impl AsRef<Path>) -> Option<&TreeNode> {
        let path = path.as_ref();
        self.nodes.iter().find(|node| node.path == path)
    }

    /// Number of nodes below a node reachable through child links.
    pub fn descendant_count(&self, id: NodeId) -> usize {
        let mut count = 0;
        let mut pending: Vec<NodeId> = match self.get(id) {
            Some(node) => node.children.clone(),
            None => return 0,
        };
        while let Some(next) = pending.pop() {
            count += 1;
            if let Some(node) = self.get(next) {
                pending.extend_from_slice(&node.children);
            }
        }
        count
    }

    /// Total number of files.
    pub fn total_files(&self) -> u64 {
        self.stats.total_files
    }

    /// Total number of directories.
    pub fn total_dirs(&self) -> u64 {
        self.stats.total_dirs
    }
}

/// Reject an empty arena so a deserialized tree always has a root.
fn non_empty_nodes<'de, D>(deserializer: D) -> Result<Vec<TreeNode>, D::Error>
where
    D: Deserializer<'de>,
{
    let nodes = Vec::<TreeNode>::deserialize(deserializer)?;
    if nodes.is_empty() {
        return Err(serde::de::Error::custom("a tree always has a root node"));
    }
    Ok(nodes)
}

/// Iterator over a node's effective ancestors.
pub struct Ancestors<'a> {
    tree: &'a DirTree,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.get(self.next?)?;
        self.next = node.parent;
        Some(node)
    }
}
