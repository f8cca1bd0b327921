/*!
 * Plain-text writer for DumpTree: tree view and file contents
 */

use std::fs;
use std::io::Write;

use tracing::debug;

use crate::error::{DumpTreeError, Result};
use crate::types::Entry;
use crate::utils::is_binary;

/// Placeholder emitted instead of binary file contents
pub const BINARY_PLACEHOLDER: &str = "<binary data skipped>";

/// Text writer for directory contents
pub struct TextWriter<W: Write> {
    out: W,
}

impl<W: Write> TextWriter<W> {
    /// Create a new text writer over any output stream
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the header and the indented tree view.
    ///
    /// `base` is the directory as the user gave it, not the resolved path.
    /// The root entry itself is never printed as a line.
    pub fn write_tree(&mut self, base: &str, root: &Entry) -> Result<()> {
        writeln!(self.out, "Contents of {}:", base)?;
        self.write_tree_level(root, 0)
    }

    fn write_tree_level(&mut self, dir: &Entry, depth: usize) -> Result<()> {
        for child in &dir.children {
            writeln!(self.out, "{}-- {}", "   ".repeat(depth), child.name)?;
            if child.is_dir {
                self.write_tree_level(child, depth + 1)?;
            }
        }
        Ok(())
    }

    /// Write a BEGIN/END content block for every non-empty file, pre-order.
    ///
    /// A failed read is fatal and stops rendering immediately; output already
    /// written stays on the stream.
    pub fn write_contents(&mut self, entry: &Entry) -> Result<()> {
        if entry.is_dir {
            for child in &entry.children {
                self.write_contents(child)?;
            }
            return Ok(());
        }

        let body = file_contents(entry)?;
        if body.is_empty() {
            debug!(file = %entry.path.display(), "skipping empty file");
            return Ok(());
        }

        writeln!(self.out, "----------- BEGIN Contents of {:?}:", entry.relative)?;
        writeln!(self.out, "{}", body)?;
        writeln!(self.out, "----------- END Contents of {:?}\n", entry.relative)?;
        Ok(())
    }
}

/// Read a file's content, substituting the placeholder for binary data.
///
/// Only the first 10,240 bytes are inspected for the binary heuristic; the
/// whole file is still read.
fn file_contents(entry: &Entry) -> Result<String> {
    let data = fs::read(&entry.path).map_err(|e| DumpTreeError::Read {
        path: entry.path.clone(),
        source: e,
    })?;

    if is_binary(&data) {
        return Ok(BINARY_PLACEHOLDER.to_string());
    }

    Ok(String::from_utf8_lossy(&data).into_owned())
}
