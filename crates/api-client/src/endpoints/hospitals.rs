//! Hospitals API endpoints
//!
//! Maps to `/hospitals`: directory listing with district filter.

use crate::error::ApiResult;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};

/// Hospitals API interface
#[derive(Clone)]
pub struct HospitalsApi {
    pub(crate) http: HttpClient,
}

impl HospitalsApi {
    /// Create a new hospitals API interface
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List hospitals with filters and pagination
    ///
    /// GET /hospitals
    pub async fn list(&self, params: &ListHospitalsParams) -> ApiResult<Vec<Hospital>> {
        self.http.get("hospitals", &params.to_query()).await
    }

    /// Get a single hospital by ID
    ///
    /// GET /hospitals/{id}
    pub async fn get(&self, id: i64) -> ApiResult<Hospital> {
        self.http.get(&format!("hospitals/{id}"), &[]).await
    }
}

/// Parameters for listing hospitals
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListHospitalsParams {
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Page size
    pub per_page: Option<u32>,
    /// Filter by district ID
    pub district_id: Option<i64>,
    /// Free-text search term
    pub search_key: Option<String>,
}

impl ListHospitalsParams {
    /// Create new params with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Filter by district
    #[must_use]
    pub fn with_district(mut self, district_id: i64) -> Self {
        self.district_id = Some(district_id);
        self
    }

    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();

        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("perPage", per_page.to_string()));
        }
        if let Some(district_id) = self.district_id {
            query.push(("districtId", district_id.to_string()));
        }
        if let Some(ref search_key) = self.search_key {
            query.push(("searchKey", search_key.clone()));
        }

        query
    }
}

/// Hospital entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    /// Hospital identifier
    pub id: i64,
    /// Hospital name
    pub name: Option<String>,
    /// Street address
    pub address: Option<String>,
    /// District name
    pub district: Option<String>,
    /// Contact phone number
    pub phone: Option<String>,
    /// Whether a 24/7 emergency unit is available
    pub emergency_available: Option<bool>,
    /// Total bed count
    pub bed_count: Option<u32>,
}
