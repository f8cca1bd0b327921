/*!
 * Configuration handling for DumpTree
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::utils::DEFAULT_IGNORE;

/// Command-line arguments for DumpTree
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "dumptree",
    version = env!("CARGO_PKG_VERSION"),
    about = "Print a directory tree and file contents for LLM context",
    long_about = "Walks a base directory, filters entries against shell-style ignore patterns, and prints an indented tree view followed by the textual contents of every non-ignored, non-binary file."
)]
pub struct Args {
    /// Base directory to scan
    #[clap(short = 'd', long = "directory", value_name = "PATH", default_value = ".")]
    pub directory: String,

    /// Shell pattern to ignore (can be used multiple times)
    #[clap(short = 'I', long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Quiet mode: print the tree only, skip file contents
    #[clap(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Log every per-entry scan decision at debug level
    #[clap(long)]
    pub verbose: bool,

    /// Do not apply the built-in default ignore patterns
    #[clap(long)]
    pub no_default_ignores: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Base directory to scan, as given on the command line
    pub target_dir: PathBuf,

    /// Patterns to ignore
    pub ignore_patterns: Vec<String>,

    /// Skip file-content rendering after the tree
    pub quiet: bool,

    /// Debug-level diagnostics
    pub verbose: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let mut ignore_patterns = args.ignore;
        if !args.no_default_ignores {
            ignore_patterns.extend(DEFAULT_IGNORE.iter().map(|p| p.to_string()));
        }

        Self {
            target_dir: PathBuf::from(args.directory),
            ignore_patterns,
            quiet: args.quiet,
            verbose: args.verbose,
        }
    }
}
