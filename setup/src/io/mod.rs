//! I/O layer: child processes, configuration, workspace scaffolding.

pub mod config;
pub mod process;
pub mod workspace;
