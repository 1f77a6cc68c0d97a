//! Orchestration for one setup run.
//!
//! All user-facing console output lives here; the step modules return
//! structured outcomes and keep their diagnostics in tracing events.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::deps::{self, InstallOutcome};
use crate::io::config::SetupConfig;
use crate::io::process::CommandRunner;
use crate::io::workspace::{self, WorkspacePaths};
use crate::ollama::{self, INSTALL_URL, OllamaStatus, RECOMMENDED_MODELS};
use crate::python::{self, MIN_PYTHON, PythonRuntime};

/// Notebook the workspace is prepared for.
const NOTEBOOK_FILE: &str = "Clean-Haystack-RAG.ipynb";

/// Result of one setup run.
///
/// `ok` reflects the two mandatory steps only; a missing Ollama never turns
/// a run unsuccessful. Steps skipped by an earlier failure are `None`/empty.
#[derive(Debug)]
pub struct SetupReport {
    pub python: Option<PythonRuntime>,
    pub deps_installed: bool,
    pub ollama: Option<OllamaStatus>,
    pub workspace_dirs: Vec<PathBuf>,
    pub ok: bool,
}

impl SetupReport {
    fn failed(python: Option<PythonRuntime>) -> Self {
        Self {
            python,
            deps_installed: false,
            ollama: None,
            workspace_dirs: Vec::new(),
            ok: false,
        }
    }
}

/// Run the four setup steps in order.
///
/// Mandatory steps short-circuit: a failed runtime check skips the install,
/// and a failed install skips the probe and the directory scaffolding. The
/// Ollama probe only affects the printed hints. `Err` is reserved for
/// unexpected I/O failures (directory creation); every command failure is
/// reported through the returned [`SetupReport`].
pub fn run_setup<R: CommandRunner>(
    root: &Path,
    runner: &R,
    config: &SetupConfig,
) -> Result<SetupReport> {
    println!("🚀 Setting up Document Q&A System...\n");

    // Runtime check, fatal.
    let Some(found) = python::locate_python(runner, config) else {
        println!(
            "❌ No Python interpreter found (tried: {})",
            config.python_candidates.join(", ")
        );
        return Ok(SetupReport::failed(None));
    };
    if found.version < MIN_PYTHON {
        println!("❌ Python {MIN_PYTHON} or higher is required");
        return Ok(SetupReport::failed(Some(found)));
    }
    println!("✅ Python {} detected", found.version);

    // Dependency install, fatal.
    println!("📦 Installing Python dependencies...");
    match deps::install_dependencies(root, runner, &found, config) {
        InstallOutcome::Installed => {
            println!("✅ Dependencies installed successfully");
        }
        InstallOutcome::ManifestMissing => {
            println!(
                "❌ Failed to install dependencies: {} not found in {}",
                config.requirements,
                root.display()
            );
            return Ok(SetupReport::failed(Some(found)));
        }
        InstallOutcome::CommandFailed => {
            println!(
                "❌ Failed to install dependencies. Please check your internet connection and try again."
            );
            return Ok(SetupReport::failed(Some(found)));
        }
    }

    // Optional tool probe, informational only.
    println!("🤖 Checking Ollama installation...");
    let ollama = ollama::probe_ollama(runner, config);
    match ollama {
        OllamaStatus::Installed => {
            println!("✅ Ollama is installed!");
            println!("\n💡 Recommended: Install a model for better performance:");
            for (model, note) in RECOMMENDED_MODELS {
                println!("   ollama pull {model:<12} # {note}");
            }
        }
        OllamaStatus::Missing => {
            println!("❌ Ollama not found. Please install it from: {INSTALL_URL}");
        }
    }

    // Workspace directories, idempotent.
    let paths = WorkspacePaths::new(root, config);
    let workspace_dirs = workspace::ensure_directories(&paths)?;
    for dir in &workspace_dirs {
        println!("✅ Created directory: {}", dir.display());
    }

    print_next_steps(config, ollama);

    let ollama_installed = ollama == OllamaStatus::Installed;
    info!(python = %found.program, ollama_installed, "setup finished");
    Ok(SetupReport {
        python: Some(found),
        deps_installed: true,
        ollama: Some(ollama),
        workspace_dirs,
        ok: true,
    })
}

fn print_next_steps(config: &SetupConfig, ollama: OllamaStatus) {
    println!("\n🎉 Setup complete!");
    println!("\n📝 Next steps:");

    let mut step = 0;
    let mut next = |line: String| {
        step += 1;
        println!("{step}. {line}");
    };

    next(format!("Start Jupyter: jupyter notebook {NOTEBOOK_FILE}"));
    if ollama == OllamaStatus::Missing {
        next(format!("Install Ollama from: {INSTALL_URL}"));
        next(format!("Pull a model: ollama pull {}", RECOMMENDED_MODELS[0].0));
    }
    next(format!(
        "Add your documents to the '{}' folder",
        config.documents_dir
    ));
    next("Run the notebook and start asking questions!".to_string());
}
