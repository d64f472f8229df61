//! Data Table Core
//!
//! Headless building blocks shared by every admin list page.
//! No GPUI types live here; the view layer maps the output to elements.
//!
//! ```text
//! PagedList ─┬─ PaginationState   (page bounds, next/previous)
//!            ├─ RequestTracker    (drops superseded responses)
//!            └─ TableModel ─┬─ rows of the loaded page
//!                           └─ SelectionSet (selected row ids)
//! ```

mod column;
mod fetch_guard;
mod model;
mod paged_list;
mod pagination;
mod selection;

pub use column::*;
pub use fetch_guard::*;
pub use model::*;
pub use paged_list::*;
pub use pagination::*;
pub use selection::*;
