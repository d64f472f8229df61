//! Domain
//!
//! Entities exchanged with the storefront API and the wire envelope around
//! them. Nothing here depends on GPUI.

mod catalog;
mod envelope;
mod location;
mod resource;
mod sales;
mod store;

pub use catalog::*;
pub use envelope::*;
pub use location::*;
pub use resource::*;
pub use sales::*;
pub use store::*;
