//! Healthcare packages API endpoints
//!
//! Maps to `/packages`: bundled diagnostic/checkup packages.

use crate::error::ApiResult;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};

/// Packages API interface
#[derive(Clone)]
pub struct PackagesApi {
    pub(crate) http: HttpClient,
}

impl PackagesApi {
    /// Create a new packages API interface
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List healthcare packages
    ///
    /// GET /packages
    pub async fn list(&self, params: &ListPackagesParams) -> ApiResult<Vec<Package>> {
        self.http.get("packages", &params.to_query()).await
    }

    /// Get a single package by ID
    ///
    /// GET /packages/{id}
    pub async fn get(&self, id: i64) -> ApiResult<Package> {
        self.http.get(&format!("packages/{id}"), &[]).await
    }
}

/// Parameters for listing packages
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPackagesParams {
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Page size
    pub per_page: Option<u32>,
    /// Free-text search term
    pub search_key: Option<String>,
}

impl ListPackagesParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();

        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("perPage", per_page.to_string()));
        }
        if let Some(ref search_key) = self.search_key {
            query.push(("searchKey", search_key.clone()));
        }

        query
    }
}

/// Healthcare package entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Package identifier
    pub id: i64,
    /// Package name
    pub name: Option<String>,
    /// Package description
    pub description: Option<String>,
    /// Price in BDT
    pub price: Option<f64>,
    /// Discounted price in BDT, when a discount applies
    pub discounted_price: Option<f64>,
    /// Included test names
    pub tests: Option<Vec<String>>,
}
