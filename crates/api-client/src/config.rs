//! Client configuration and credential providers
//!
//! A [`Configuration`] is immutable once built: every credential change on
//! the facade constructs a fresh instance and rebuilds the sub-clients, so
//! a sub-client can never observe credentials newer than the configuration
//! it was constructed with.

use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Credential slot for the partner API key (`X-API-Key`).
pub const API_KEY_AUTH: &str = "apiKeyAuth";

/// Credential slot for the partner ID (`X-Partner-ID`).
pub const PARTNER_ID_AUTH: &str = "partnerIdAuth";

/// Async provider of named header credentials.
///
/// Invoked per request; implementations resolve a credential slot
/// ([`API_KEY_AUTH`], [`PARTNER_ID_AUTH`]) to its current value, returning
/// an empty string for unknown slots. Tests inject fakes through this seam.
#[async_trait]
pub trait ApiKeyProvider: Send + Sync {
    /// Resolve the credential for a named slot.
    async fn key(&self, name: &str) -> String;
}

/// Static partner credential pair (server-to-server).
#[derive(Debug, Clone)]
pub struct PartnerCredentials {
    partner_id: String,
    api_key: String,
}

impl PartnerCredentials {
    /// Create a provider answering the two partner slots.
    pub fn new(partner_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            partner_id: partner_id.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ApiKeyProvider for PartnerCredentials {
    async fn key(&self, name: &str) -> String {
        match name {
            API_KEY_AUTH => self.api_key.clone(),
            PARTNER_ID_AUTH => self.partner_id.clone(),
            _ => String::new(),
        }
    }
}

/// Client configuration
///
/// Shared behind an `Arc`; replaced wholesale, never mutated in place.
#[derive(Clone)]
pub struct Configuration {
    /// Base URL of the API (e.g. `https://api.lifeplusbd.com/api/v2`)
    pub base_path: String,
    /// Bearer token for user authentication
    pub access_token: Option<String>,
    /// Extra headers attached to every request
    pub headers: HashMap<String, String>,
    /// Provider for partner header credentials
    pub api_key: Option<Arc<dyn ApiKeyProvider>>,
    /// Request timeout
    pub timeout: Duration,
}

impl Configuration {
    /// Create a configuration for the given base URL with no credentials.
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            access_token: None,
            headers: HashMap::new(),
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Builder-style method to set the access token
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Builder-style method to set custom headers
    #[must_use]
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Builder-style method to set a credential provider
    #[must_use]
    pub fn with_api_key(mut self, provider: Arc<dyn ApiKeyProvider>) -> Self {
        self.api_key = Some(provider);
        self
    }

    /// Builder-style method to set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_path.is_empty() {
            return Err(ApiError::config("base_path cannot be empty"));
        }

        if !self.base_path.starts_with("http://") && !self.base_path.starts_with("https://") {
            return Err(ApiError::config(
                "base_path must start with http:// or https://",
            ));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("base_path", &self.base_path)
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .field("headers", &self.headers)
            .field("api_key", &self.api_key.as_ref().map(|_| "<provider>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(Configuration::new("https://api.lifeplusbd.com/api/v2")
            .validate()
            .is_ok());
        assert!(Configuration::new("").validate().is_err());
        assert!(Configuration::new("ftp://api.lifeplusbd.com")
            .validate()
            .is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let config = Configuration::new("https://api.lifeplusbd.com/api/v2")
            .with_access_token("tok_1")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.access_token.as_deref(), Some("tok_1"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_partner_credentials_slots() {
        let provider = PartnerCredentials::new("partner_42", "lpak_test_key");

        assert_eq!(provider.key(API_KEY_AUTH).await, "lpak_test_key");
        assert_eq!(provider.key(PARTNER_ID_AUTH).await, "partner_42");
        assert_eq!(provider.key("somethingElse").await, "");
    }

    #[test]
    fn test_debug_redacts_token() {
        let config =
            Configuration::new("https://api.lifeplusbd.com/api/v2").with_access_token("secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret"));
    }
}
