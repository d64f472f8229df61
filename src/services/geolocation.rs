//! Location Detection
//!
//! Two tiers, tried in order: a precise source (coordinates the operator
//! configured for this machine), then a coarse IP-based lookup. Failures
//! are reported through the error callback and never escape.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::constants::{HTTP_TIMEOUT_SECS, IP_LOCATION_URL};
use crate::domain::Location;
use crate::error::{Error, Result};

/// Something that can tell where this machine is
pub trait LocationSource {
    fn name(&self) -> &'static str;

    fn locate(&self) -> impl Future<Output = Result<Location>> + Send;
}

// ==================== Precise tier ====================

/// Coordinates set in the local preferences
#[derive(Debug, Clone, Default)]
pub struct ConfiguredLocation {
    location: Option<Location>,
}

impl ConfiguredLocation {
    pub fn new(location: Option<Location>) -> Self {
        Self { location }
    }
}

impl LocationSource for ConfiguredLocation {
    fn name(&self) -> &'static str {
        "configured"
    }

    async fn locate(&self) -> Result<Location> {
        match &self.location {
            Some(location) if location.is_valid() => Ok(location.clone()),
            Some(_) => Err(Error::Geolocation {
                message: "configured coordinates are out of range".to_string(),
            }),
            None => Err(Error::Geolocation {
                message: "no coordinates configured".to_string(),
            }),
        }
    }
}

// ==================== Coarse tier ====================

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    #[serde(default)]
    country_name: Option<String>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    error: bool,
    #[serde(default)]
    reason: Option<String>,
}

/// IP geolocation over HTTP (ipapi.co response shape)
#[derive(Debug, Clone)]
pub struct IpLocationSource {
    http: Client,
    url: String,
}

impl IpLocationSource {
    pub fn new() -> Result<Self> {
        Self::with_url(IP_LOCATION_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }
}

impl LocationSource for IpLocationSource {
    fn name(&self) -> &'static str {
        "ip-lookup"
    }

    async fn locate(&self) -> Result<Location> {
        let response = self.http.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Geolocation {
                message: format!("lookup answered {}", response.status()),
            });
        }
        let body: IpLookupResponse = response.json().await?;
        if body.error {
            return Err(Error::Geolocation {
                message: body.reason.unwrap_or_else(|| "lookup refused".to_string()),
            });
        }
        match (body.country_name, body.latitude, body.longitude) {
            (Some(country), Some(latitude), Some(longitude)) => Ok(Location {
                country,
                latitude,
                longitude,
            }),
            _ => Err(Error::Geolocation {
                message: "lookup response is incomplete".to_string(),
            }),
        }
    }
}

// ==================== Detection ====================

/// Try `precise`, then `coarse`; the coarse tier is only consulted when the
/// precise one fails
pub async fn locate_with_fallback<P, C>(precise: &P, coarse: &C) -> Result<Location>
where
    P: LocationSource,
    C: LocationSource,
{
    match precise.locate().await {
        Ok(location) => {
            tracing::debug!(source = precise.name(), "Location resolved");
            return Ok(location);
        }
        Err(e) => tracing::info!(source = precise.name(), error = %e, "Falling back to coarse location"),
    }

    match coarse.locate().await {
        Ok(location) => {
            tracing::debug!(source = coarse.name(), "Location resolved");
            Ok(location)
        }
        Err(e) => {
            tracing::warn!(source = coarse.name(), error = %e, "Location detection failed");
            Err(e)
        }
    }
}

/// Best-effort detection reporting through exactly one of the callbacks
pub async fn detect_location<P, C>(
    precise: &P,
    coarse: &C,
    on_success: impl FnOnce(Location),
    on_error: impl FnOnce(String),
) where
    P: LocationSource,
    C: LocationSource,
{
    match locate_with_fallback(precise, coarse).await {
        Ok(location) => on_success(location),
        Err(e) => on_error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Fixed {
        result: Option<Location>,
        calls: AtomicUsize,
    }

    impl Fixed {
        fn ok(country: &str) -> Self {
            Self {
                result: Some(Location {
                    country: country.to_string(),
                    latitude: 1.0,
                    longitude: 2.0,
                }),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                result: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl LocationSource for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn locate(&self) -> Result<Location> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone().ok_or_else(|| Error::Geolocation {
                message: "unavailable".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_precise_success_skips_coarse() {
        let precise = Fixed::ok("Norway");
        let coarse = Fixed::ok("Sweden");
        let location = locate_with_fallback(&precise, &coarse).await.unwrap();
        assert_eq!(location.country, "Norway");
        assert_eq!(coarse.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_falls_back_to_coarse() {
        let precise = Fixed::failing();
        let coarse = Fixed::ok("Sweden");
        let location = locate_with_fallback(&precise, &coarse).await.unwrap();
        assert_eq!(location.country, "Sweden");
        assert_eq!(precise.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_both_failing_reports_one_error() {
        let precise = Fixed::failing();
        let coarse = Fixed::failing();
        let mut successes = 0;
        let mut errors = Vec::new();
        detect_location(&precise, &coarse, |_| successes += 1, |e| errors.push(e)).await;
        assert_eq!(successes, 0);
        assert_eq!(errors.len(), 1);
    }

    #[tokio::test]
    async fn test_configured_location_out_of_range_fails() {
        let source = ConfiguredLocation::new(Some(Location {
            country: "Nowhere".into(),
            latitude: 95.0,
            longitude: 0.0,
        }));
        assert!(source.locate().await.is_err());
        assert!(ConfiguredLocation::default().locate().await.is_err());
    }

    #[tokio::test]
    async fn test_ip_lookup_parses_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/json/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ip":"1.2.3.4","country_name":"Portugal","latitude":38.72,"longitude":-9.14}"#)
            .create_async()
            .await;

        let source = IpLocationSource::with_url(format!("{}/json/", server.url())).unwrap();
        let location = source.locate().await.unwrap();
        assert_eq!(location.country, "Portugal");
        assert_eq!(location.longitude, -9.14);
    }

    #[tokio::test]
    async fn test_ip_lookup_error_flag_is_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/json/")
            .with_status(200)
            .with_body(r#"{"error":true,"reason":"RateLimited"}"#)
            .create_async()
            .await;

        let source = IpLocationSource::with_url(format!("{}/json/", server.url())).unwrap();
        match source.locate().await {
            Err(Error::Geolocation { message }) => assert_eq!(message, "RateLimited"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
