//! Location

use serde::{Deserialize, Serialize};

/// Coarse position of the operator, used to pre-fill request forms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Whether the coordinates are on the globe
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}
