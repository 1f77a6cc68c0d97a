//! Setup configuration stored as `setup.toml` in the workspace root.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Name of the optional config file under the workspace root.
pub const CONFIG_FILE: &str = "setup.toml";

/// Setup configuration (TOML).
///
/// The file is optional and intended for humans. Missing fields default to
/// the layout the notebook expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SetupConfig {
    /// Requirements manifest passed to `pip install -r`.
    pub requirements: String,

    /// Directory the user drops source documents into.
    pub documents_dir: String,

    /// Directory the notebook writes answers and artifacts to.
    pub outputs_dir: String,

    /// Interpreter candidates probed in order by the runtime check.
    pub python_candidates: Vec<String>,

    /// Wall-clock bound for the dependency install, in seconds.
    pub install_timeout_secs: u64,

    /// Wall-clock bound for version probes, in seconds.
    pub probe_timeout_secs: u64,

    /// Truncate captured command output beyond this many bytes.
    pub output_limit_bytes: usize,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            requirements: "requirements.txt".to_string(),
            documents_dir: "your_documents".to_string(),
            outputs_dir: "outputs".to_string(),
            python_candidates: vec!["python3".to_string(), "python".to_string()],
            install_timeout_secs: 15 * 60,
            probe_timeout_secs: 10,
            output_limit_bytes: 100_000,
        }
    }
}

impl SetupConfig {
    pub fn validate(&self) -> Result<()> {
        if self.requirements.trim().is_empty() {
            return Err(anyhow!("requirements must be a non-empty file name"));
        }
        if self.documents_dir.trim().is_empty() || self.outputs_dir.trim().is_empty() {
            return Err(anyhow!("workspace directory names must be non-empty"));
        }
        if self.python_candidates.is_empty()
            || self.python_candidates.iter().any(|c| c.trim().is_empty())
        {
            return Err(anyhow!("python_candidates must be a non-empty array"));
        }
        if self.install_timeout_secs == 0 {
            return Err(anyhow!("install_timeout_secs must be > 0"));
        }
        if self.probe_timeout_secs == 0 {
            return Err(anyhow!("probe_timeout_secs must be > 0"));
        }
        if self.output_limit_bytes == 0 {
            return Err(anyhow!("output_limit_bytes must be > 0"));
        }
        Ok(())
    }

    pub fn install_timeout(&self) -> Duration {
        Duration::from_secs(self.install_timeout_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SetupConfig::default()`.
pub fn load_config(path: &Path) -> Result<SetupConfig> {
    if !path.exists() {
        let cfg = SetupConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SetupConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, SetupConfig::default());
    }

    #[test]
    fn load_merges_partial_overrides_with_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "requirements = \"deps.txt\"\npython_candidates = [\"python3.11\"]\n",
        )
        .expect("write config");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.requirements, "deps.txt");
        assert_eq!(cfg.python_candidates, vec!["python3.11".to_string()]);
        assert_eq!(cfg.documents_dir, SetupConfig::default().documents_dir);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "install_timeout_secs = 0\n").expect("write config");

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("install_timeout_secs"));
    }

    #[test]
    fn empty_candidate_list_is_rejected() {
        let cfg = SetupConfig {
            python_candidates: Vec::new(),
            ..SetupConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
