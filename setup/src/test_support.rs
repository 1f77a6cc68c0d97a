//! Test-only scripted command runner.

use std::sync::Mutex;

use anyhow::{Result, anyhow};

use crate::io::process::{CommandOutput, CommandRunner, RunRequest};

/// Canned response for one scripted invocation.
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Child ran to completion with this exit code and output.
    Exit {
        code: i32,
        stdout: String,
        stderr: String,
    },
    /// Spawning failed, as for a binary missing from `PATH`.
    SpawnError,
}

impl Scripted {
    /// Successful exit with the given stdout.
    pub fn ok(stdout: &str) -> Self {
        Scripted::Exit {
            code: 0,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    /// Exit with a non-zero code and no output.
    pub fn fail(code: i32) -> Self {
        Scripted::Exit {
            code,
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

/// [`CommandRunner`] that replays canned responses and records every
/// invocation for assertions.
///
/// Responses are keyed by program name plus first argument, which is enough
/// to tell a `python3 --version` probe from a `python3 -m pip` install.
/// Unscripted invocations behave like a missing binary.
#[derive(Default)]
pub struct ScriptedRunner {
    responses: Vec<(String, String, Scripted)>,
    calls: Mutex<Vec<RunRequest>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the response for invocations of `program` whose first
    /// argument is `first_arg`.
    pub fn respond(mut self, program: &str, first_arg: &str, response: Scripted) -> Self {
        self.responses
            .push((program.to_string(), first_arg.to_string(), response));
        self
    }

    /// All invocations seen so far, in order.
    pub fn invocations(&self) -> Vec<RunRequest> {
        self.calls.lock().expect("calls lock").clone()
    }

    /// True when `program` was invoked with `first_arg` as its first argument.
    pub fn invoked(&self, program: &str, first_arg: &str) -> bool {
        self.invocations()
            .iter()
            .any(|call| call.program == program && call.args.first().map(String::as_str) == Some(first_arg))
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, request: &RunRequest) -> Result<CommandOutput> {
        self.calls.lock().expect("calls lock").push(request.clone());
        let first_arg = request.args.first().map(String::as_str).unwrap_or("");
        let response = self
            .responses
            .iter()
            .find(|(program, arg, _)| *program == request.program && *arg == first_arg)
            .map(|(_, _, response)| response.clone())
            .unwrap_or(Scripted::SpawnError);
        match response {
            Scripted::Exit {
                code,
                stdout,
                stderr,
            } => Ok(CommandOutput {
                code: Some(code),
                stdout: stdout.into_bytes(),
                stderr: stderr.into_bytes(),
                stdout_truncated: 0,
                stderr_truncated: 0,
                timed_out: false,
            }),
            Scripted::SpawnError => Err(anyhow!(
                "scripted spawn failure for {} {}",
                request.program,
                first_arg
            )),
        }
    }
}
