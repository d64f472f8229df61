//! View Components
//!
//! UI components for the storefront admin client.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        TitleBar                              │
//! ├────────┬────────────────────────────────────────────────────┤
//! │        │                                                     │
//! │        │   ResourceListView<R> │ CategoriesPage<D, R>        │
//! │ Side   │   RequestFormView     │ SettingsView                │
//! │ bar    │                                                     │
//! │ (88px) │                                                     │
//! │        │                                       ┌──────────┐  │
//! │        │                                       │  toasts  │  │
//! └────────┴───────────────────────────────────────┴──────────┴──┘
//! ```

mod categories;
mod content;
mod request_form;
mod resource_list;
mod settings;
mod sidebar;
mod title_bar;

pub use categories::*;
pub use content::*;
pub use request_form::*;
pub use resource_list::*;
pub use settings::*;
pub use sidebar::*;
pub use title_bar::*;
