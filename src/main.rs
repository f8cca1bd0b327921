/*!
 * Command-line interface for DumpTree
 */

use std::io;
use std::process;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing::{error, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dumptree::config::{Args, Config};
use dumptree::error::Result;
use dumptree::scanner::Scanner;
use dumptree::writer::TextWriter;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return;
    }

    // Wire the verbose flag to the tracing log level. RUST_LOG in the
    // environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if args.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();

    // Create configuration
    let config = Config::from_args(args);

    if let Err(e) = run(&config) {
        error!(directory = %config.target_dir.display(), error = %e, "dump failed");
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    // Scan directory
    let scanner = Scanner::new(config.clone());
    let root = scanner.scan()?;

    let stdout = io::stdout();
    let mut writer = TextWriter::new(stdout.lock());

    // Print out tree view first
    writer.write_tree(&config.target_dir.display().to_string(), &root)?;

    if config.quiet {
        return Ok(());
    }

    writer.write_contents(&root)
}
