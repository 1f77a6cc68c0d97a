//! Workspace directory scaffolding.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::config::SetupConfig;

/// Canonical directories of a document Q&A workspace.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    pub root: PathBuf,
    pub documents_dir: PathBuf,
    pub outputs_dir: PathBuf,
}

impl WorkspacePaths {
    pub fn new(root: impl Into<PathBuf>, config: &SetupConfig) -> Self {
        let root = root.into();
        Self {
            documents_dir: root.join(&config.documents_dir),
            outputs_dir: root.join(&config.outputs_dir),
            root,
        }
    }

    /// Directories ensured by [`ensure_directories`], in creation order.
    pub fn directories(&self) -> [&Path; 2] {
        [&self.documents_dir, &self.outputs_dir]
    }
}

/// Create the workspace directories if absent.
///
/// Idempotent: re-running against an existing workspace is a no-op and
/// leaves any user content in place. Returns the ensured directories.
pub fn ensure_directories(paths: &WorkspacePaths) -> Result<Vec<PathBuf>> {
    let mut ensured = Vec::new();
    for dir in paths.directories() {
        fs::create_dir_all(dir).with_context(|| format!("create directory {}", dir.display()))?;
        ensured.push(dir.to_path_buf());
    }
    Ok(ensured)
}
