//! File and directory node types.

use std::path::{Path, PathBuf};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Index of a node within its [`DirTree`](crate::DirTree) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new NodeId from a raw arena index.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Id for an arena slot, or `None` if the slot does not fit in a `u32`.
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }

    /// Arena slot for this id.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Type of file system node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Directory (including ignored directories, which are never expanded).
    Directory,
    /// Anything that is not a directory.
    File,
}

impl NodeKind {
    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, NodeKind::Directory)
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        matches!(self, NodeKind::File)
    }
}

/// A single file or directory in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Arena slot of this node.
    pub id: NodeId,

    /// Path as reached from the build root.
    pub path: PathBuf,

    /// Basename of `path`.
    pub name: CompactString,

    /// File or directory.
    #[serde(rename = "type")]
    pub kind: NodeKind,

    /// Number of open ancestor directories when this node was created.
    pub depth: u32,

    /// Effective parent. Ignored directories point at the traversal stack
    /// top at the time they were visited.
    pub parent: Option<NodeId>,

    /// Children in directory-listing order. Empty for files and ignored
    /// directories.
    pub children: Vec<NodeId>,

    /// Directory whose name is on the ignore list; never descended into.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub ignored: bool,
}

impl TreeNode {
    /// Create a new file node.
    pub fn new_file(id: NodeId, path: impl Into<PathBuf>, depth: u32, parent: NodeId) -> Self {
        let path = path.into();
        Self {
            id,
            name: name_of(&path),
            path,
            kind: NodeKind::File,
            depth,
            parent: Some(parent),
            children: Vec::new(),
            ignored: false,
        }
    }

    /// Create a new directory node with no children yet.
    pub fn new_directory(
        id: NodeId,
        path: impl Into<PathBuf>,
        depth: u32,
        parent: Option<NodeId>,
    ) -> Self {
        let path = path.into();
        Self {
            id,
            name: name_of(&path),
            path,
            kind: NodeKind::Directory,
            depth,
            parent,
            children: Vec::new(),
            ignored: false,
        }
    }

    /// Check if this node is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Check if this node is a file.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Check if this node is the tree root.
    pub fn is_root(&self) -> bool {
        self.parent.is_none() && self.depth == 0
    }

    /// Get the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// Basename of a path, falling back to the whole path for roots like `.` or `/`.
pub(crate) fn name_of(path: &Path) -> CompactString {
    match path.file_name() {
        Some(name) => CompactString::new(name.to_string_lossy()),
        None => CompactString::new(path.to_string_lossy()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        let id = NodeId::new(42);
        assert_eq!(id.0, 42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::from_index(7), Some(NodeId::new(7)));
        assert_eq!(NodeId::from_index(u32::MAX as usize), Some(NodeId::new(u32::MAX)));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_node_id_from_index_out_of_range() {
        assert_eq!(NodeId::from_index(u32::MAX as usize + 1), None);
    }

    #[test]
    fn test_file_node_creation() {
        let node = TreeNode::new_file(NodeId::new(3), "/r/a.txt", 1, NodeId::new(0));
        assert!(node.is_file());
        assert!(!node.is_dir());
        assert_eq!(node.name.as_str(), "a.txt");
        assert_eq!(node.parent, Some(NodeId::new(0)));
        assert_eq!(node.child_count(), 0);
    }

    #[test]
    fn test_directory_node_creation() {
        let node = TreeNode::new_directory(NodeId::new(0), "/r", 0, None);
        assert!(node.is_dir());
        assert!(node.is_root());
        assert!(!node.ignored);
        assert_eq!(node.name.as_str(), "r");
    }

    #[test]
    fn test_name_of_dot() {
        assert_eq!(name_of(Path::new(".")).as_str(), ".");
        assert_eq!(name_of(Path::new("src/lib.rs")).as_str(), "lib.rs");
    }
}
