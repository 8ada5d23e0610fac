//! Partner account API endpoints
//!
//! Maps to `/partners`. These endpoints authenticate with the partner
//! header pair (`X-API-Key` / `X-Partner-ID`) rather than a user token.

use crate::error::ApiResult;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};

/// Partners API interface
#[derive(Clone)]
pub struct PartnersApi {
    pub(crate) http: HttpClient,
}

impl PartnersApi {
    /// Create a new partners API interface
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Get the partner account profile
    ///
    /// GET /partners/profile
    pub async fn profile(&self) -> ApiResult<PartnerProfile> {
        self.http.get("partners/profile", &[]).await
    }

    /// Get usage statistics for the partner account
    ///
    /// GET /partners/stats
    pub async fn stats(&self) -> ApiResult<PartnerStats> {
        self.http.get("partners/stats", &[]).await
    }
}

/// Partner account profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerProfile {
    /// Partner identifier
    pub id: String,
    /// Organization name
    pub name: Option<String>,
    /// Contact email
    pub contact_email: Option<String>,
    /// Whether the account is active
    pub active: Option<bool>,
}

/// Partner usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerStats {
    /// Orders placed through this partner
    pub total_orders: Option<u64>,
    /// Total order value in BDT
    pub total_revenue: Option<f64>,
    /// Reporting period (e.g. "2024-06")
    pub period: Option<String>,
}
