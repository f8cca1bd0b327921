/*!
 * DumpTree - Print a directory tree and file contents for LLM context
 *
 * This library walks a base directory into a tree of entries, filters them
 * against shell-style ignore patterns, and renders the tree plus the textual
 * contents of every surviving file.
 */

pub mod config;
pub mod error;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use error::{DumpTreeError, Result};
pub use scanner::Scanner;
pub use types::Entry;
pub use utils::{is_binary, DEFAULT_IGNORE};
pub use writer::TextWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
