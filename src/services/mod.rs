//! Service Layer
//!
//! Network access for the UI: the storefront REST client, location
//! detection, and the tokio bridge they run on.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │               ServiceHub                 │
//! │  ┌────────────┐   ┌───────────────────┐  │
//! │  │ ApiClient  │   │ Location sources  │  │
//! │  │ (reqwest)  │   │ config → IP       │  │
//! │  └────────────┘   └───────────────────┘  │
//! └──────────────────────────────────────────┘
//!                     │ run_in_tokio
//!                     ▼
//!              State layer (GPUI)
//! ```

mod api;
mod geolocation;
mod hub;
mod runtime;

pub use api::*;
pub use geolocation::*;
pub use hub::*;
pub use runtime::*;
