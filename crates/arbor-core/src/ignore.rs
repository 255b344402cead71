//! Literal basename ignore set.

use std::ffi::OsStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Set of basenames whose directories are materialized but never expanded.
///
/// Matching is exact string equality against a path's final component.
/// Insertion order is kept so the list can be shown the way it was written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IgnoreSet {
    names: IndexSet<String>,
}

impl IgnoreSet {
    /// Create an empty ignore set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse ignore file content: one name per line, empty lines dropped.
    pub fn parse(content: &str) -> Self {
        content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Add a name. Returns `false` if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Check if a basename is ignored.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Check if a path component is ignored. Names that are not valid
    /// UTF-8 never match.
    pub fn matches(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|name| self.contains(name))
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no names are ignored.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for IgnoreSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_empty_lines() {
        let set = IgnoreSet::parse("node_modules\n\ntarget\n");
        assert_eq!(set.len(), 2);
        assert!(set.contains("node_modules"));
        assert!(set.contains("target"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_parse_is_literal() {
        let set = IgnoreSet::parse("*.log\n# comment\n");
        assert!(set.contains("*.log"));
        assert!(set.contains("# comment"));
        assert!(!set.contains("debug.log"));
    }

    #[test]
    fn test_parse_crlf() {
        let set = IgnoreSet::parse("dist\r\nbuild\r\n");
        assert!(set.contains("dist"));
        assert!(set.contains("build"));
    }

    #[test]
    fn test_order_and_dedup() {
        let mut set = IgnoreSet::parse("b\na\nb");
        assert!(!set.insert("a"));
        assert!(set.insert(".git"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["b", "a", ".git"]);
    }

    #[test]
    fn test_matches_os_str() {
        let set = IgnoreSet::parse("target");
        assert!(set.matches(OsStr::new("target")));
        assert!(!set.matches(OsStr::new("targets")));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_never_matches() {
        use std::os::unix::ffi::OsStrExt;

        let set = IgnoreSet::parse("caf\u{FFFD}");
        assert!(!set.matches(OsStr::from_bytes(b"caf\xe9")));
    }
}
