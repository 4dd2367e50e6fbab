//! Pure descriptor and command-assembly logic. No process spawning, no filesystem access.

pub mod assemble;
pub mod descriptor;
pub mod policy;
