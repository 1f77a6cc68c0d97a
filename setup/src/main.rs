//! Workspace setup for the document Q&A notebook.
//!
//! Checks the Python runtime, installs the notebook dependencies, probes
//! the optional Ollama model runner, and scaffolds the workspace
//! directories. Progress is reported on stdout; the exit code is `0` on
//! success, `1` when a mandatory step failed, `2` for tool errors.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use setup::exit_codes;
use setup::io::config::{CONFIG_FILE, load_config};
use setup::io::process::SystemRunner;
use setup::logging;
use setup::run::run_setup;

#[derive(Parser)]
#[command(
    name = "setup",
    version,
    about = "Prepare a local workspace for the document Q&A notebook"
)]
struct Cli {
    /// Workspace root to set up. Defaults to the current directory.
    #[arg(long)]
    root: Option<PathBuf>,
}

fn main() {
    logging::init();
    match run() {
        Ok(true) => std::process::exit(exit_codes::OK),
        Ok(false) => std::process::exit(exit_codes::FAILED),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("resolve current directory")?,
    };
    let config = load_config(&root.join(CONFIG_FILE))?;
    let report = run_setup(&root, &SystemRunner, &config)?;
    Ok(report.ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_current_directory() {
        let cli = Cli::parse_from(["setup"]);
        assert!(cli.root.is_none());
    }

    #[test]
    fn parse_explicit_root() {
        let cli = Cli::parse_from(["setup", "--root", "/tmp/workspace"]);
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/workspace")));
    }
}
