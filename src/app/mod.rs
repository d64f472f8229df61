//! Application Layer
//!
//! App initialization, window management and the root workspace.

pub mod application;
pub mod workspace;
