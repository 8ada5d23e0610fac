//! Ambulance dispatch API endpoints
//!
//! Maps to `/ambulance`.

use crate::error::ApiResult;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};

/// Ambulance API interface
#[derive(Clone)]
pub struct AmbulanceApi {
    pub(crate) http: HttpClient,
}

impl AmbulanceApi {
    /// Create a new ambulance API interface
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List available ambulance types
    ///
    /// GET /ambulance/types
    pub async fn types(&self) -> ApiResult<Vec<AmbulanceType>> {
        self.http.get("ambulance/types", &[]).await
    }

    /// Request an ambulance dispatch
    ///
    /// POST /ambulance/requests
    pub async fn request(&self, request: &AmbulanceRequest) -> ApiResult<AmbulanceBooking> {
        self.http.post("ambulance/requests", request).await
    }
}

/// Ambulance type entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbulanceType {
    /// Type identifier
    pub id: i64,
    /// Type name (e.g. "AC", "ICU", "Freezer")
    pub name: Option<String>,
    /// Type description
    pub description: Option<String>,
    /// Base fare in BDT
    pub base_fare: Option<f64>,
}

/// Ambulance dispatch request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbulanceRequest {
    /// Pickup address
    pub pickup_address: String,
    /// Destination address
    pub destination_address: String,
    /// Requested ambulance type
    pub ambulance_type_id: i64,
    /// Contact phone number at pickup
    pub contact_phone: String,
}

/// Ambulance booking entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbulanceBooking {
    /// Booking identifier
    pub id: String,
    /// Booking status
    pub status: Option<String>,
    /// Estimated arrival in minutes
    pub eta_minutes: Option<u32>,
    /// Quoted fare in BDT
    pub fare: Option<f64>,
}
