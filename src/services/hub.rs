//! Service Hub
//!
//! Holds the shared API client. Views and states reach it through the
//! global store; changing the API settings swaps the client in place.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{ApiClient, ApiConfig, ConfiguredLocation, IpLocationSource, detect_location};
use crate::domain::Location;
use crate::error::Result;

/// Central hub for the backend services
#[derive(Clone)]
pub struct ServiceHub {
    api: Arc<RwLock<ApiClient>>,
    ip_lookup: Arc<IpLocationSource>,
}

impl ServiceHub {
    pub fn new(config: ApiConfig) -> Result<Self> {
        tracing::info!(base_url = %config.base_url, "Creating API client");
        Ok(Self {
            api: Arc::new(RwLock::new(ApiClient::new(config)?)),
            ip_lookup: Arc::new(IpLocationSource::new()?),
        })
    }

    /// Snapshot of the current client, safe to move into a tokio task
    pub fn api(&self) -> ApiClient {
        self.api.read().clone()
    }

    /// Replace the client after the connection settings changed.
    ///
    /// Requests already in flight finish on the old client.
    pub fn reconfigure(&self, config: ApiConfig) -> Result<()> {
        let client = ApiClient::new(config)?;
        tracing::info!(base_url = %client.base_url(), "API client reconfigured");
        *self.api.write() = client;
        Ok(())
    }

    /// Detect the location, preferring `configured` coordinates.
    ///
    /// The error is the message meant for the operator.
    pub async fn detect_location(
        &self,
        configured: Option<Location>,
    ) -> std::result::Result<Location, String> {
        let precise = ConfiguredLocation::new(configured);
        let mut found = None;
        let mut failure = None;
        detect_location(
            &precise,
            self.ip_lookup.as_ref(),
            |location| found = Some(location),
            |message| failure = Some(message),
        )
        .await;
        found.ok_or_else(|| failure.unwrap_or_default())
    }
}

impl std::fmt::Debug for ServiceHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceHub")
            .field("api", &*self.api.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconfigure_swaps_client() {
        let hub = ServiceHub::new(ApiConfig::default()).unwrap();
        let before = hub.api();
        hub.reconfigure(ApiConfig {
            base_url: "https://shop.example.com/api/".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(hub.api().base_url(), "https://shop.example.com/api");
        assert_ne!(before.base_url(), hub.api().base_url());
    }

    #[test]
    fn test_reconfigure_rejects_empty_url_and_keeps_old_client() {
        let hub = ServiceHub::new(ApiConfig::default()).unwrap();
        let result = hub.reconfigure(ApiConfig {
            base_url: String::new(),
            ..Default::default()
        });
        assert!(result.is_err());
        assert_eq!(hub.api().base_url(), "http://localhost:4000/api");
    }

    #[tokio::test]
    async fn test_detect_location_prefers_configured() {
        let hub = ServiceHub::new(ApiConfig::default()).unwrap();
        let configured = Location {
            country: "Iceland".into(),
            latitude: 64.1,
            longitude: -21.9,
        };
        let found = hub.detect_location(Some(configured.clone())).await;
        assert_eq!(found, Ok(configured));
    }
}
