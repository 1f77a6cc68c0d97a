//! Python runtime detection and minimum-version enforcement.

use std::fmt;

use tracing::debug;

use crate::io::config::SetupConfig;
use crate::io::process::{CommandRunner, RunRequest};

/// Minimum interpreter version the notebook supports.
pub const MIN_PYTHON: PythonVersion = PythonVersion { major: 3, minor: 8 };

/// A `major.minor` interpreter version.
///
/// Field order matters: derived ordering compares `major` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Interpreter selected by the runtime check.
///
/// The program name is reused by the dependency install so pip runs under
/// the same interpreter that passed the version check.
#[derive(Debug, Clone)]
pub struct PythonRuntime {
    /// Program name the probe succeeded with (for example `python3`).
    pub program: String,
    pub version: PythonVersion,
}

/// Parse a `Python X.Y[.Z]` banner as printed by `python --version`.
///
/// Returns `None` when no version is present in the text.
pub fn parse_version(text: &str) -> Option<PythonVersion> {
    use std::sync::LazyLock;
    static VERSION_RE: LazyLock<regex::Regex> =
        LazyLock::new(|| regex::Regex::new(r"Python (\d+)\.(\d+)").unwrap());

    let caps = VERSION_RE.captures(text)?;
    let major = caps[1].parse().ok()?;
    let minor = caps[2].parse().ok()?;
    Some(PythonVersion { major, minor })
}

/// Probe the configured candidates in order and return the first
/// interpreter that answers `--version` with a parsable banner.
///
/// Interpreters older than 3.4 print the banner to stderr, so both streams
/// are searched. Returns `None` when no candidate responds; the caller
/// decides how to report that.
pub fn locate_python<R: CommandRunner>(runner: &R, config: &SetupConfig) -> Option<PythonRuntime> {
    for candidate in &config.python_candidates {
        let request = RunRequest {
            program: candidate.clone(),
            args: vec!["--version".to_string()],
            cwd: None,
            timeout: config.probe_timeout(),
            output_limit_bytes: config.output_limit_bytes,
        };
        let output = match runner.run(&request) {
            Ok(output) => output,
            Err(err) => {
                debug!(candidate, err = %err, "interpreter probe failed to spawn");
                continue;
            }
        };
        if !output.success() {
            debug!(candidate, exit_code = ?output.code, "interpreter probe exited non-zero");
            continue;
        }
        let banner = format!("{}{}", output.stdout_text(), output.stderr_text());
        if let Some(version) = parse_version(&banner) {
            debug!(candidate, %version, "interpreter detected");
            return Some(PythonRuntime {
                program: candidate.clone(),
                version,
            });
        }
        debug!(candidate, "no version in probe output");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Scripted, ScriptedRunner};

    #[test]
    fn parses_full_and_patchless_banners() {
        assert_eq!(
            parse_version("Python 3.10.12"),
            Some(PythonVersion {
                major: 3,
                minor: 10
            })
        );
        assert_eq!(
            parse_version("Python 3.8"),
            Some(PythonVersion { major: 3, minor: 8 })
        );
        assert_eq!(parse_version("not a banner"), None);
    }

    #[test]
    fn version_ordering_compares_major_then_minor() {
        let old = PythonVersion { major: 2, minor: 7 };
        let near = PythonVersion { major: 3, minor: 7 };
        let min = MIN_PYTHON;
        let new = PythonVersion {
            major: 3,
            minor: 12,
        };
        assert!(old < min);
        assert!(near < min);
        assert!(min <= min);
        assert!(new > min);
    }

    #[test]
    fn falls_through_to_the_next_candidate() {
        let runner = ScriptedRunner::new()
            .respond("python3", "--version", Scripted::SpawnError)
            .respond("python", "--version", Scripted::ok("Python 3.9.2"));

        let found = locate_python(&runner, &SetupConfig::default()).expect("runtime");
        assert_eq!(found.program, "python");
        assert_eq!(found.version, PythonVersion { major: 3, minor: 9 });
    }

    #[test]
    fn reads_banner_from_stderr() {
        let runner = ScriptedRunner::new().respond(
            "python3",
            "--version",
            Scripted::Exit {
                code: 0,
                stdout: String::new(),
                stderr: "Python 2.7.18\n".to_string(),
            },
        );

        let found = locate_python(&runner, &SetupConfig::default()).expect("runtime");
        assert_eq!(found.version, PythonVersion { major: 2, minor: 7 });
    }

    #[test]
    fn no_candidate_means_none() {
        let runner = ScriptedRunner::new();
        assert!(locate_python(&runner, &SetupConfig::default()).is_none());
    }
}
