//! Composite Components
//!
//! Larger pieces assembled from primitives: the data table and the toast
//! overlay.

pub mod data_table;
pub mod toast;
