//! Workspace bootstrap for the document Q&A notebook.
//!
//! This crate implements a fixed four-step setup pipeline: check the Python
//! runtime, install the notebook dependencies, probe the optional Ollama
//! model runner, and scaffold the workspace directories. The architecture
//! enforces a strict separation:
//!
//! - **[`io`]**: Side-effecting operations (child processes, configuration,
//!   directory scaffolding). Isolated so tests can script command outcomes.
//! - **Step modules** ([`python`], [`deps`], [`ollama`]): one fallible step
//!   each, converting command results into step outcomes at the invocation
//!   boundary.
//! - **[`run`]**: Orchestration: ordered execution, short-circuit on the
//!   mandatory steps, console reporting.

pub mod deps;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod ollama;
pub mod python;
pub mod run;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
