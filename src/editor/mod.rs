//! Bulk Editor
//!
//! Creates several categories or sub-categories in one request. Drafts are
//! validated locally and the batch is only sent when every entry passes.

mod bulk;
mod drafts;

pub use bulk::*;
pub use drafts::*;
