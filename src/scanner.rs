/*!
 * Directory scanning functionality
 */

use std::fs;

use glob_match::glob_match;
use tracing::debug;

use crate::config::Config;
use crate::error::{DumpTreeError, Result};
use crate::types::Entry;

/// Scanner for directory contents
pub struct Scanner {
    /// Scanner configuration
    config: Config,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Scan the target directory and return the populated entry tree.
    ///
    /// The returned root entry carries the resolved base path; its children
    /// are fully populated and sorted before this returns. The first failed
    /// directory listing aborts the whole scan — a partial tree is never
    /// returned.
    pub fn scan(&self) -> Result<Entry> {
        let base = fs::canonicalize(&self.config.target_dir).map_err(|e| {
            DumpTreeError::InvalidPath(format!("{}: {}", self.config.target_dir.display(), e))
        })?;
        let meta = fs::metadata(&base).map_err(|e| {
            DumpTreeError::InvalidPath(format!("{}: {}", base.display(), e))
        })?;
        if !meta.is_dir() {
            return Err(DumpTreeError::InvalidPath(format!(
                "{}: not a directory",
                base.display()
            )));
        }

        let mut root = Entry::root(base);
        self.scan_directory(&mut root)?;
        Ok(root)
    }

    /// Recursively populate `dir` with its surviving children.
    ///
    /// Children of a subtree are fully resolved before the next sibling is
    /// processed; each level is sorted by name once all its children exist.
    fn scan_directory(&self, dir: &mut Entry) -> Result<()> {
        let listing = fs::read_dir(&dir.path).map_err(|e| DumpTreeError::Scan {
            path: dir.path.clone(),
            source: e,
        })?;

        for item in listing {
            let item = item.map_err(|e| DumpTreeError::Scan {
                path: dir.path.clone(),
                source: e,
            })?;
            let name = item.file_name().to_string_lossy().into_owned();
            let relative = if dir.relative.is_empty() {
                name.clone()
            } else {
                format!("{}/{}", dir.relative, name)
            };

            if self.should_ignore(&relative, &name) {
                debug!(path = %item.path().display(), "ignoring entry per ignore list");
                continue;
            }

            // Non-following check: a symlinked directory stays a leaf, so the
            // walk can never cycle through a link.
            let is_dir = item
                .file_type()
                .map_err(|e| DumpTreeError::Scan {
                    path: item.path(),
                    source: e,
                })?
                .is_dir();

            let mut child = Entry {
                name,
                path: item.path(),
                relative,
                is_dir,
                children: Vec::new(),
            };

            debug!(entry = %child.path.display(), parent = %dir.path.display(), "adding entry");

            if is_dir {
                self.scan_directory(&mut child)?;
            }
            dir.children.push(child);
        }

        dir.children.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(())
    }

    /// Check whether an entry should be ignored.
    ///
    /// Each pattern is tried against the root-relative path and the bare
    /// name; either match suffices. Malformed patterns simply never match.
    pub fn should_ignore(&self, relative: &str, name: &str) -> bool {
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| glob_match(pattern, relative) || glob_match(pattern, name))
    }
}
