//! Notebook dependency installation via pip.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::io::config::SetupConfig;
use crate::io::process::{CommandRunner, RunRequest};
use crate::python::PythonRuntime;

/// Outcome of the dependency install step. Any variant other than
/// [`InstallOutcome::Installed`] is fatal to the overall run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    /// The requirements manifest is missing from the workspace root.
    ManifestMissing,
    /// pip exited non-zero, timed out, or failed to spawn.
    CommandFailed,
}

/// Install the requirements manifest through the interpreter selected by
/// the runtime check, as `<python> -m pip install -r <manifest>`.
///
/// pip's own output is captured for diagnostics and never echoed to the
/// console. Failures are converted here; nothing propagates to the caller.
pub fn install_dependencies<R: CommandRunner>(
    root: &Path,
    runner: &R,
    python: &PythonRuntime,
    config: &SetupConfig,
) -> InstallOutcome {
    let manifest = root.join(&config.requirements);
    if !manifest.is_file() {
        warn!(manifest = %manifest.display(), "requirements manifest not found");
        return InstallOutcome::ManifestMissing;
    }

    let request = RunRequest {
        program: python.program.clone(),
        args: vec![
            "-m".to_string(),
            "pip".to_string(),
            "install".to_string(),
            "-r".to_string(),
            config.requirements.clone(),
        ],
        cwd: Some(root.to_path_buf()),
        timeout: config.install_timeout(),
        output_limit_bytes: config.output_limit_bytes,
    };

    info!(python = %python.program, manifest = %config.requirements, "installing dependencies");
    match runner.run(&request) {
        Ok(output) if output.success() => {
            debug!("pip install completed");
            InstallOutcome::Installed
        }
        Ok(output) => {
            warn!(
                exit_code = ?output.code,
                timed_out = output.timed_out,
                stderr = %output.stderr_text(),
                "pip install failed"
            );
            InstallOutcome::CommandFailed
        }
        Err(err) => {
            warn!(err = %err, "pip install failed to spawn");
            InstallOutcome::CommandFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::python::PythonVersion;
    use crate::test_support::{Scripted, ScriptedRunner};
    use std::fs;

    fn python3() -> PythonRuntime {
        PythonRuntime {
            program: "python3".to_string(),
            version: PythonVersion {
                major: 3,
                minor: 11,
            },
        }
    }

    #[test]
    fn installs_through_the_selected_interpreter() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config = SetupConfig::default();
        fs::write(temp.path().join(&config.requirements), "haystack-ai\n").expect("write manifest");
        let runner = ScriptedRunner::new().respond("python3", "-m", Scripted::ok(""));

        let outcome = install_dependencies(temp.path(), &runner, &python3(), &config);

        assert_eq!(outcome, InstallOutcome::Installed);
        let calls = runner.invocations();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "python3");
        assert_eq!(
            calls[0].args,
            vec!["-m", "pip", "install", "-r", "requirements.txt"]
        );
        assert_eq!(calls[0].cwd.as_deref(), Some(temp.path()));
    }

    #[test]
    fn missing_manifest_skips_pip_entirely() {
        let temp = tempfile::tempdir().expect("tempdir");
        let runner = ScriptedRunner::new().respond("python3", "-m", Scripted::ok(""));

        let outcome =
            install_dependencies(temp.path(), &runner, &python3(), &SetupConfig::default());

        assert_eq!(outcome, InstallOutcome::ManifestMissing);
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn nonzero_exit_is_a_command_failure() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config = SetupConfig::default();
        fs::write(temp.path().join(&config.requirements), "haystack-ai\n").expect("write manifest");
        let runner = ScriptedRunner::new().respond("python3", "-m", Scripted::fail(1));

        let outcome = install_dependencies(temp.path(), &runner, &python3(), &config);

        assert_eq!(outcome, InstallOutcome::CommandFailed);
    }
}
