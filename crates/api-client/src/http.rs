//! HTTP transport bound to a single configuration
//!
//! A thin `reqwest` wrapper shared by every sub-client. The transport does
//! not retry, interpret status codes beyond success/failure, or coordinate
//! concurrent requests; failures propagate to the caller unchanged.

use crate::config::{Configuration, API_KEY_AUTH, PARTNER_ID_AUTH};
use crate::error::{ApiError, ApiResult};
use lifeplus_core::request_id::generate_request_id;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Partner API key header
const X_API_KEY: &str = "X-API-Key";

/// Partner ID header
const X_PARTNER_ID: &str = "X-Partner-ID";

/// HTTP transport for one configuration generation.
///
/// Cheap to clone; all clones share the underlying connection pool and the
/// same immutable [`Configuration`].
#[derive(Clone)]
pub struct HttpClient {
    inner: Client,
    config: Arc<Configuration>,
}

impl HttpClient {
    /// Build a transport for the given configuration.
    pub fn new(config: Arc<Configuration>) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("lifeplus-rust-sdk/", env!("CARGO_PKG_VERSION"))),
        );

        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ApiError::InvalidHeader(name.clone()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| ApiError::InvalidHeader(name.to_string()))?;
            default_headers.insert(name, value);
        }

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self { inner, config })
    }

    /// The configuration this transport was built against.
    #[must_use]
    pub fn config(&self) -> &Arc<Configuration> {
        &self.config
    }

    /// Perform a GET request.
    #[instrument(skip(self, query), fields(request_id))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        self.request(Method::GET, path, query, Option::<&()>::None)
            .await
    }

    /// Perform a POST request with a JSON body.
    #[instrument(skip(self, body), fields(request_id))]
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    /// Perform a POST request with no body.
    #[instrument(skip(self), fields(request_id))]
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(Method::POST, path, &[], Option::<&()>::None)
            .await
    }

    /// Perform a PUT request with a JSON body.
    #[instrument(skip(self, body), fields(request_id))]
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request(Method::PUT, path, &[], Some(body)).await
    }

    /// Perform a DELETE request.
    #[instrument(skip(self), fields(request_id))]
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(Method::DELETE, path, &[], Option::<&()>::None)
            .await
    }

    /// Execute a request against the configured base path.
    async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> ApiResult<T> {
        let url = format!(
            "{}/{}",
            self.config.base_path.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let request_id = generate_request_id();

        let mut request = self
            .inner
            .request(method.clone(), &url)
            .header(X_REQUEST_ID, &request_id);

        if !query.is_empty() {
            request = request.query(query);
        }

        request = self.apply_auth(request).await;

        if let Some(b) = body {
            request = request.json(b);
        }

        debug!(
            request_id = %request_id,
            method = %method,
            url = %url,
            "Dispatching request"
        );

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Attach bearer and partner credentials to an outgoing request.
    async fn apply_auth(&self, mut request: RequestBuilder) -> RequestBuilder {
        if let Some(ref token) = self.config.access_token {
            request = request.bearer_auth(token);
        }

        if let Some(ref provider) = self.config.api_key {
            let api_key = provider.key(API_KEY_AUTH).await;
            if !api_key.is_empty() {
                request = request.header(X_API_KEY, api_key);
            }

            let partner_id = provider.key(PARTNER_ID_AUTH).await;
            if !partner_id.is_empty() {
                request = request.header(X_PARTNER_ID, partner_id);
            }
        }

        request
    }

    /// Deserialize a successful response, or surface the error body.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(ApiError::Request)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::api(status.as_u16(), message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = Arc::new(Configuration::new("https://api.lifeplusbd.com/api/v2"));
        assert!(HttpClient::new(config).is_ok());
    }

    #[test]
    fn test_client_creation_rejects_bad_base_path() {
        let config = Arc::new(Configuration::new("not-a-url"));
        assert!(HttpClient::new(config).is_err());
    }

    #[test]
    fn test_client_creation_rejects_bad_header() {
        let mut config = Configuration::new("https://api.lifeplusbd.com/api/v2");
        config
            .headers
            .insert("X-Bad\nName".to_string(), "value".to_string());
        let result = HttpClient::new(Arc::new(config));
        assert!(matches!(result, Err(ApiError::InvalidHeader(_))));
    }
}
