//! Delivery addresses API endpoints
//!
//! Maps to `/addresses`. All operations require authentication.

use crate::endpoints::MessageResponse;
use crate::error::ApiResult;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};

/// Addresses API interface
#[derive(Clone)]
pub struct AddressesApi {
    pub(crate) http: HttpClient,
}

impl AddressesApi {
    /// Create a new addresses API interface
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List the user's saved addresses
    ///
    /// GET /addresses
    pub async fn list(&self) -> ApiResult<Vec<Address>> {
        self.http.get("addresses", &[]).await
    }

    /// Save a new address
    ///
    /// POST /addresses
    pub async fn create(&self, request: &SaveAddressRequest) -> ApiResult<Address> {
        self.http.post("addresses", request).await
    }

    /// Update a saved address
    ///
    /// PUT /addresses/{id}
    pub async fn update(&self, id: &str, request: &SaveAddressRequest) -> ApiResult<Address> {
        self.http.put(&format!("addresses/{id}"), request).await
    }

    /// Delete a saved address
    ///
    /// DELETE /addresses/{id}
    pub async fn delete(&self, id: &str) -> ApiResult<MessageResponse> {
        self.http.delete(&format!("addresses/{id}")).await
    }
}

/// Address create/update request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAddressRequest {
    /// Display label (e.g. "Home", "Office")
    pub label: Option<String>,
    /// Address line
    pub line1: String,
    /// Secondary address line
    pub line2: Option<String>,
    /// City name
    pub city: Option<String>,
    /// District name
    pub district: Option<String>,
    /// Postal code
    pub postcode: Option<String>,
    /// Make this the default delivery address
    pub is_default: Option<bool>,
}

/// Saved address entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Address identifier
    pub id: String,
    /// Display label
    pub label: Option<String>,
    /// Address line
    pub line1: Option<String>,
    /// Secondary address line
    pub line2: Option<String>,
    /// City name
    pub city: Option<String>,
    /// District name
    pub district: Option<String>,
    /// Postal code
    pub postcode: Option<String>,
    /// Whether this is the default delivery address
    pub is_default: Option<bool>,
}
