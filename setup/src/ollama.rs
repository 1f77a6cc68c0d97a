//! Optional Ollama model runner detection.

use tracing::debug;

use crate::io::config::SetupConfig;
use crate::io::process::{CommandRunner, RunRequest};

/// Binary probed for the optional local model runner.
pub const OLLAMA_PROGRAM: &str = "ollama";

/// Where to get Ollama when the probe fails.
pub const INSTALL_URL: &str = "https://ollama.ai/";

/// Models suggested when Ollama is present, with a short note each.
pub const RECOMMENDED_MODELS: [(&str, &str); 3] = [
    ("gemma2:2b", "Good balance of speed and quality"),
    ("phi3:mini", "Faster, smaller model"),
    ("llama3.2:1b", "Very fast, compact model"),
];

/// Outcome of the Ollama probe. Never fatal to the overall run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OllamaStatus {
    Installed,
    Missing,
}

/// Probe `ollama --version`.
///
/// A spawn failure and a non-zero exit mean the same thing to the user:
/// the runner is not usable, so the notebook falls back to other backends.
pub fn probe_ollama<R: CommandRunner>(runner: &R, config: &SetupConfig) -> OllamaStatus {
    let request = RunRequest {
        program: OLLAMA_PROGRAM.to_string(),
        args: vec!["--version".to_string()],
        cwd: None,
        timeout: config.probe_timeout(),
        output_limit_bytes: config.output_limit_bytes,
    };

    match runner.run(&request) {
        Ok(output) if output.success() => {
            debug!(version = %output.stdout_text().trim(), "ollama detected");
            OllamaStatus::Installed
        }
        Ok(output) => {
            debug!(exit_code = ?output.code, "ollama probe exited non-zero");
            OllamaStatus::Missing
        }
        Err(err) => {
            debug!(err = %err, "ollama not found");
            OllamaStatus::Missing
        }
    }
}
