/*!
 * Utility functions for DumpTree
 */

use once_cell::sync::Lazy;

/// Number of leading bytes inspected by the binary-content heuristic
pub const BINARY_CHECK_LIMIT: usize = 10_240;

/// Check whether content looks binary: any NUL byte within the first
/// `BINARY_CHECK_LIMIT` bytes marks it as binary.
pub fn is_binary(content: &[u8]) -> bool {
    let probe = &content[..content.len().min(BINARY_CHECK_LIMIT)];
    probe.contains(&0)
}

/// Default patterns to ignore
pub static DEFAULT_IGNORE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Version Control
        ".git",
        ".svn",
        ".hg",
        // OS Files
        ".DS_Store",
        "Thumbs.db",
        // Dependencies
        "node_modules",
        "vendor",
        "package-lock.json",
        "yarn.lock",
        // Build & Dist
        "dist",
        "build",
        "out",
        // Python
        "__pycache__",
        ".venv",
        "venv",
        "*.pyc",
        // Rust
        "target",
        "Cargo.lock",
        // IDEs & Editors
        ".idea",
        ".vscode",
        "*.swp",
        "*~",
    ]
});
