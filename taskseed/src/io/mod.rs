//! I/O helpers: configuration, manifests, and process execution.

pub mod config;
pub mod manifest;
pub mod process;
pub mod runner;
