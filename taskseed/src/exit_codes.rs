//! Stable exit codes for taskseed binaries.

/// Every task was created (or there was nothing to create).
pub const OK: i32 = 0;
/// A task invocation failed, or the manifest/config could not be loaded.
pub const FAILED: i32 = 1;
