//! Components - Reusable UI Components
//!
//! Pure UI components that don't depend on services or do I/O. State and
//! callbacks come from the owning view.

pub mod composite;
pub mod primitives;
