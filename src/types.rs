/*!
 * Core types and data structures for the DumpTree application
 */

use std::path::PathBuf;

/// Name given to the synthetic root entry of a scan
pub const ROOT_NAME: &str = "<root>";

/// One node (file or directory) in the scanned tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Final path component; `"<root>"` for the scan root
    pub name: String,
    /// Fully resolved absolute path
    pub path: PathBuf,
    /// Path relative to the scan root, `/`-joined; empty for the root
    pub relative: String,
    /// Whether this entry is a directory
    pub is_dir: bool,
    /// Child entries, sorted ascending by name once the scan of this
    /// directory is complete; empty for files
    pub children: Vec<Entry>,
}

impl Entry {
    /// Create the synthetic root entry for a scan of `path`
    pub fn root(path: PathBuf) -> Self {
        Self {
            name: ROOT_NAME.to_string(),
            path,
            relative: String::new(),
            is_dir: true,
            children: Vec::new(),
        }
    }
}
