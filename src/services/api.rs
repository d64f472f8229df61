//! Storefront API Client
//!
//! Thin typed wrapper over the REST API. Every call returns the unwrapped
//! payload or an [`Error`]; callers decide whether a failure is shown or
//! only logged.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::constants::{DEFAULT_API_BASE_URL, HTTP_TIMEOUT_SECS};
use crate::domain::{ApiEnvelope, NewCustomRequest, Page, StoreSettings};
use crate::error::{Error, Result};

/// Connection settings for [`ApiClient`]
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// Sent as a bearer token when present
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
        }
    }
}

/// Cheap to clone; clones share one connection pool
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    base_url: String,
    api_key: Option<String>,
    http: Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(Error::Invalid {
                message: "API base URL is empty".to_string(),
            });
        }
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            inner: Arc::new(ApiClientInner {
                base_url,
                api_key: config.api_key.filter(|k| !k.is_empty()),
                http,
            }),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.inner.base_url, path.trim_start_matches('/'));
        let builder = self.inner.http.request(method, url);
        match &self.inner.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<ApiEnvelope<T>> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<ApiEnvelope<T>>(&body) {
            Ok(envelope) => Ok(envelope),
            // Proxies and crashed servers answer without an envelope
            Err(_) if !status.is_success() => Err(Error::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn mutate(&self, builder: RequestBuilder) -> Result<()> {
        self.send::<Value>(builder).await?.into_mutation()?;
        Ok(())
    }

    // ==================== Listings ====================

    /// `GET /{path}?page=&limit=`
    pub async fn fetch_page<R: DeserializeOwned>(
        &self,
        path: &str,
        page: u32,
        limit: u32,
    ) -> Result<Page<R>> {
        let builder = self
            .request(Method::GET, path)
            .query(&[("page", page), ("limit", limit)]);
        self.send::<Page<R>>(builder).await?.into_data()
    }

    /// `DELETE /{path}/{id}`
    pub async fn delete(&self, path: &str, id: u64) -> Result<()> {
        self.mutate(self.request(Method::DELETE, &format!("{path}/{id}")))
            .await
    }

    /// `POST /{path}/bulk-delete` with `{"ids": [...]}`
    pub async fn delete_many(&self, path: &str, ids: &[u64]) -> Result<()> {
        let builder = self
            .request(Method::POST, &format!("{path}/bulk-delete"))
            .json(&json!({ "ids": ids }));
        self.mutate(builder).await
    }

    /// `PATCH /{path}/{id}`
    pub async fn update(&self, path: &str, id: u64, patch: &Value) -> Result<()> {
        let builder = self
            .request(Method::PATCH, &format!("{path}/{id}"))
            .json(patch);
        self.mutate(builder).await
    }

    /// `POST /{path}/bulk` with the whole batch; all or nothing
    pub async fn create_batch<D: Serialize>(&self, path: &str, items: &[D]) -> Result<()> {
        let builder = self
            .request(Method::POST, &format!("{path}/bulk"))
            .json(items);
        self.mutate(builder).await
    }

    // ==================== Store ====================

    pub async fn fetch_settings(&self) -> Result<StoreSettings> {
        self.send(self.request(Method::GET, "settings"))
            .await?
            .into_data()
    }

    pub async fn save_settings(&self, settings: &StoreSettings) -> Result<()> {
        self.mutate(self.request(Method::PUT, "settings").json(settings))
            .await
    }

    /// `POST /requests`
    pub async fn submit_request(&self, request: &NewCustomRequest) -> Result<()> {
        self.mutate(self.request(Method::POST, "requests").json(request))
            .await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .field("authenticated", &self.inner.api_key.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::editor::CategoryDraft;
    use mockito::Matcher;

    fn client_for(server: &mockito::ServerGuard, key: Option<&str>) -> ApiClient {
        ApiClient::new(ApiConfig {
            base_url: format!("{}/api/", server.url()),
            api_key: key.map(str::to_string),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_page_parses_envelope() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/categories")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "2".into()),
                Matcher::UrlEncoded("limit".into(), "10".into()),
            ]))
            .match_header("authorization", "Bearer secret")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"statusCode":200,"data":{"data":[{"id":11,"name":"Prints","slug":"prints"}],"page":2,"total":11}}"#,
            )
            .create_async()
            .await;

        let client = client_for(&server, Some("secret"));
        let page: Page<Category> = client.fetch_page("categories", 2, 10).await.unwrap();

        mock.assert_async().await;
        assert_eq!(page.total, 11);
        assert_eq!(page.data[0].slug, "prints");
    }

    #[tokio::test]
    async fn test_non_200_status_code_is_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/orders")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"statusCode":500,"message":"database offline"}"#)
            .create_async()
            .await;

        let client = client_for(&server, None);
        let result = client.fetch_page::<Category>("orders", 1, 10).await;
        match result {
            Err(Error::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "database offline");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_plain_text_error_body_is_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/api/products/3")
            .with_status(502)
            .with_body("Bad Gateway")
            .create_async()
            .await;

        let client = client_for(&server, None);
        match client.delete("products", 3).await {
            Err(Error::Api { status, .. }) => assert_eq!(status, 502),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_bulk_delete_sends_ids() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/gallery/bulk-delete")
            .match_body(Matcher::Json(json!({ "ids": [4, 7] })))
            .with_status(200)
            .with_body(r#"{"statusCode":200}"#)
            .create_async()
            .await;

        let client = client_for(&server, None);
        client.delete_many("gallery", &[4, 7]).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_batch_accepts_201() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/categories/bulk")
            .match_body(Matcher::Json(json!([
                { "name": "Prints", "slug": "prints" },
                { "name": "Frames", "slug": "frames" }
            ])))
            .with_status(201)
            .with_body(r#"{"statusCode":201,"message":"created"}"#)
            .create_async()
            .await;

        let drafts = vec![
            CategoryDraft {
                name: "Prints".into(),
                slug: "prints".into(),
            },
            CategoryDraft {
                name: "Frames".into(),
                slug: "frames".into(),
            },
        ];
        let client = client_for(&server, None);
        client.create_batch("categories", &drafts).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_patch_sends_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/api/ads/5")
            .match_body(Matcher::Json(json!({ "active": false })))
            .with_body(r#"{"statusCode":200}"#)
            .create_async()
            .await;

        let client = client_for(&server, None);
        client.update("ads", 5, &json!({ "active": false })).await.unwrap();
        mock.assert_async().await;
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        let result = ApiClient::new(ApiConfig {
            base_url: "  ".into(),
            ..Default::default()
        });
        assert!(matches!(result, Err(Error::Invalid { .. })));
    }
}
