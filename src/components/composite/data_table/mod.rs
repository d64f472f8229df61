//! DataTable Component
//!
//! Renders the output of a headless [`TableModel`](crate::table::TableModel).
//! Every interaction is reported as a [`TableAction`](crate::table::TableAction).

pub mod data_table;
pub mod pagination;

pub use data_table::{DataTable, HeaderCell, TableActionHandler, TableLabels, TableRow, render_cell};
pub use pagination::Pagination;
