//! Stable exit codes for the setup CLI.

/// Setup completed; both mandatory steps succeeded.
pub const OK: i32 = 0;
/// A mandatory step failed (runtime check or dependency install).
pub const FAILED: i32 = 1;
/// Invalid configuration or an unexpected I/O error.
pub const INVALID: i32 = 2;
