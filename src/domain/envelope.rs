//! API Envelope
//!
//! Every response of the storefront API is wrapped as
//! `{ "statusCode": 200, "data": ..., "message": ... }`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Response wrapper shared by all endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub status_code: u16,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    fn failure(&self) -> Error {
        Error::Api {
            status: self.status_code,
            message: self
                .message
                .clone()
                .unwrap_or_else(|| "request failed".to_string()),
        }
    }

    /// Payload of a read; only `statusCode == 200` with data counts
    pub fn into_data(self) -> Result<T> {
        if self.status_code != 200 {
            return Err(self.failure());
        }
        match self.data {
            Some(data) => Ok(data),
            None => Err(Error::Api {
                status: self.status_code,
                message: "response carried no data".to_string(),
            }),
        }
    }

    /// Outcome of a mutation; 200 and 201 both succeed and data is optional
    pub fn into_mutation(self) -> Result<Option<T>> {
        match self.status_code {
            200 | 201 => Ok(self.data),
            _ => Err(self.failure()),
        }
    }
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default = "first_page")]
    pub page: u32,
    pub total: u64,
}

fn first_page() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_envelope_parses() {
        let raw = json!({
            "statusCode": 200,
            "data": { "data": [1, 2, 3], "page": 2, "total": 13 }
        });
        let envelope: ApiEnvelope<Page<u32>> = serde_json::from_value(raw).unwrap();
        let page = envelope.into_data().unwrap();
        assert_eq!(page.data, vec![1, 2, 3]);
        assert_eq!((page.page, page.total), (2, 13));
    }

    #[test]
    fn test_non_200_read_is_api_error() {
        let raw = json!({ "statusCode": 404, "message": "not found" });
        let envelope: ApiEnvelope<Page<u32>> = serde_json::from_value(raw).unwrap();
        match envelope.into_data() {
            Err(Error::Api { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_created_counts_as_mutation_success() {
        let raw = json!({ "statusCode": 201 });
        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_value(raw).unwrap();
        assert!(envelope.into_mutation().unwrap().is_none());
    }

    #[test]
    fn test_created_is_not_a_read_success() {
        let raw = json!({ "statusCode": 201, "data": 5 });
        let envelope: ApiEnvelope<u32> = serde_json::from_value(raw).unwrap();
        assert!(envelope.into_data().is_err());
    }
}
