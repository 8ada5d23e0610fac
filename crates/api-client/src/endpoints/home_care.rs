//! Home care API endpoints
//!
//! Maps to `/home-care`: home nursing and caregiver services.

use crate::error::ApiResult;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};

/// Home care API interface
#[derive(Clone)]
pub struct HomeCareApi {
    pub(crate) http: HttpClient,
}

impl HomeCareApi {
    /// Create a new home care API interface
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List available home care services
    ///
    /// GET /home-care/services
    pub async fn services(&self) -> ApiResult<Vec<HomeCareService>> {
        self.http.get("home-care/services", &[]).await
    }

    /// Book a home care service
    ///
    /// POST /home-care/bookings
    pub async fn book(&self, request: &BookHomeCareRequest) -> ApiResult<HomeCareBooking> {
        self.http.post("home-care/bookings", request).await
    }
}

/// Home care service entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeCareService {
    /// Service identifier
    pub id: i64,
    /// Service name
    pub name: Option<String>,
    /// Service description
    pub description: Option<String>,
    /// Daily rate in BDT
    pub daily_rate: Option<f64>,
}

/// Home care booking request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookHomeCareRequest {
    /// Service to book
    pub service_id: i64,
    /// Service address
    pub address_id: String,
    /// Start date (YYYY-MM-DD)
    pub start_date: String,
    /// Duration in days
    pub duration_days: u32,
}

/// Home care booking entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeCareBooking {
    /// Booking identifier
    pub id: String,
    /// Booking status
    pub status: Option<String>,
    /// Start date
    pub start_date: Option<String>,
    /// Total price in BDT
    pub total: Option<f64>,
}
