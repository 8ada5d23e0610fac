//! Home sample collection API endpoints
//!
//! Maps to `/home-sample`: at-home lab sample collection.

use crate::error::ApiResult;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};

/// Home sample API interface
#[derive(Clone)]
pub struct HomeSampleApi {
    pub(crate) http: HttpClient,
}

impl HomeSampleApi {
    /// Create a new home sample API interface
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List tests available for home collection
    ///
    /// GET /home-sample/tests
    pub async fn tests(&self) -> ApiResult<Vec<LabTest>> {
        self.http.get("home-sample/tests", &[]).await
    }

    /// Book a home sample collection
    ///
    /// POST /home-sample/bookings
    pub async fn book(&self, request: &BookHomeSampleRequest) -> ApiResult<HomeSampleBooking> {
        self.http.post("home-sample/bookings", request).await
    }

    /// List the user's collection bookings
    ///
    /// GET /home-sample/bookings
    pub async fn bookings(&self) -> ApiResult<Vec<HomeSampleBooking>> {
        self.http.get("home-sample/bookings", &[]).await
    }
}

/// Lab test entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabTest {
    /// Test identifier
    pub id: i64,
    /// Test name
    pub name: Option<String>,
    /// Price in BDT
    pub price: Option<f64>,
    /// Preparation instructions (e.g. fasting requirements)
    pub preparation: Option<String>,
}

/// Home sample booking request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookHomeSampleRequest {
    /// Tests to collect samples for
    pub test_ids: Vec<i64>,
    /// Collection address
    pub address_id: String,
    /// Requested collection date (YYYY-MM-DD)
    pub scheduled_date: String,
    /// Preferred time slot (e.g. "morning")
    pub slot: Option<String>,
}

/// Home sample booking entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSampleBooking {
    /// Booking identifier
    pub id: String,
    /// Booking status
    pub status: Option<String>,
    /// Scheduled collection date
    pub scheduled_date: Option<String>,
    /// Total price in BDT
    pub total: Option<f64>,
}
