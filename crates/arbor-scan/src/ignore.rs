//! Ignore-list loading.

use std::path::Path;

use arbor_core::{DEFAULT_IGNORE_FILE, DEFAULT_VCS_DIR, IgnoreSet};
use tracing::debug;

/// Load `.gitignore` from `root`, adding `.git` when the file is readable.
pub fn load_ignore_list(root: impl AsRef<Path>) -> IgnoreSet {
    load_ignore_file(root, DEFAULT_IGNORE_FILE, DEFAULT_VCS_DIR)
}

/// Load `ignore_file` from `root` as a list of literal basenames.
///
/// When the file is readable its non-empty lines are returned together with
/// `vcs_dir`. Bytes that are not valid UTF-8 are decoded lossily, so only the
/// affected lines change. When the file cannot be read for any reason the
/// result is empty, and `vcs_dir` is *not* added.
pub fn load_ignore_file(root: impl AsRef<Path>, ignore_file: &str, vcs_dir: &str) -> IgnoreSet {
    let path = root.as_ref().join(ignore_file);
    match std::fs::read(&path) {
        Ok(bytes) => {
            let mut names = IgnoreSet::parse(&String::from_utf8_lossy(&bytes));
            names.insert(vcs_dir);
            debug!(path = %path.display(), names = ?names.iter().collect::<Vec<_>>(), "loaded ignore list");
            names
        }
        Err(err) => {
            debug!(path = %path.display(), error = %err, "no ignore list");
            IgnoreSet::new()
        }
    }
}
