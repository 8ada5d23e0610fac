//! Reference data API endpoints
//!
//! Maps to `/lookup`: small, slow-changing reference lists.

use crate::error::ApiResult;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};

/// Lookup API interface
#[derive(Clone)]
pub struct LookupApi {
    pub(crate) http: HttpClient,
}

impl LookupApi {
    /// Create a new lookup API interface
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List medical specialties
    ///
    /// GET /lookup/specialties
    pub async fn specialties(&self) -> ApiResult<Vec<Specialty>> {
        self.http.get("lookup/specialties", &[]).await
    }

    /// List districts
    ///
    /// GET /lookup/districts
    pub async fn districts(&self) -> ApiResult<Vec<District>> {
        self.http.get("lookup/districts", &[]).await
    }

    /// List supported payment methods
    ///
    /// GET /lookup/payment-methods
    pub async fn payment_methods(&self) -> ApiResult<Vec<PaymentMethod>> {
        self.http.get("lookup/payment-methods", &[]).await
    }
}

/// Medical specialty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specialty {
    /// Specialty identifier
    pub id: i64,
    /// Specialty name
    pub name: Option<String>,
}

/// District
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct District {
    /// District identifier
    pub id: i64,
    /// District name
    pub name: Option<String>,
}

/// Payment method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Method code (e.g. "cash_on_delivery", "bkash")
    pub code: String,
    /// Display name
    pub name: Option<String>,
    /// Whether the method is currently enabled
    pub enabled: Option<bool>,
}
