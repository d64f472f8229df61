//! Resource
//!
//! Binds an entity to its REST collection and its table layout.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::table::{Identifiable, Renderable};

/// An entity listed by a generic admin page
pub trait Resource:
    Identifiable<Id = u64> + Renderable + Clone + DeserializeOwned + Send + Sync + 'static
{
    /// Collection path below the API base URL, e.g. `products`
    const PATH: &'static str;

    /// Translation key of the page title (`resources` namespace)
    const TITLE_KEY: &'static str;

    /// Whether rows can be multi-selected for bulk deletion
    const MULTI_SELECT: bool = true;

    /// Translation key of the row update button, for resources that have one
    const UPDATE_LABEL: Option<&'static str> = None;

    /// Body of the `PATCH` sent by the row update button.
    ///
    /// `None` hides the button for this record.
    fn quick_update(&self) -> Option<Value> {
        None
    }
}
