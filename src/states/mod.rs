//! State Management Layer
//!
//! Centralized application state using GPUI's Entity system.
//! Follows a unidirectional data flow pattern:
//!
//! ```text
//! UI Action → State Method → spawn run_in_tokio(API call) → State Update → notify → UI Refresh
//! ```

mod app;
mod editor;
mod i18n;
mod list;
mod notification;
mod request;
mod store_settings;

pub use app::*;
pub use editor::*;
pub use i18n::*;
pub use list::*;
pub use notification::*;
pub use request::*;
pub use store_settings::*;
