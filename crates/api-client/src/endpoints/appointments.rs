//! Appointments API endpoints
//!
//! Maps to `/appointments`: booking and managing doctor appointments.
//! All operations require authentication.

use crate::endpoints::MessageResponse;
use crate::error::ApiResult;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};

/// Appointments API interface
#[derive(Clone)]
pub struct AppointmentsApi {
    pub(crate) http: HttpClient,
}

impl AppointmentsApi {
    /// Create a new appointments API interface
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List the user's appointments
    ///
    /// GET /appointments
    pub async fn list(&self, params: &ListAppointmentsParams) -> ApiResult<Vec<Appointment>> {
        self.http.get("appointments", &params.to_query()).await
    }

    /// Book an appointment with a doctor
    ///
    /// POST /appointments
    pub async fn book(&self, request: &BookAppointmentRequest) -> ApiResult<Appointment> {
        self.http.post("appointments", request).await
    }

    /// Cancel an appointment
    ///
    /// DELETE /appointments/{id}
    pub async fn cancel(&self, id: i64) -> ApiResult<MessageResponse> {
        self.http.delete(&format!("appointments/{id}")).await
    }
}

/// Parameters for listing appointments
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListAppointmentsParams {
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Page size
    pub per_page: Option<u32>,
    /// Filter by status (e.g. "upcoming", "completed", "cancelled")
    pub status: Option<String>,
}

impl ListAppointmentsParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();

        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("perPage", per_page.to_string()));
        }
        if let Some(ref status) = self.status {
            query.push(("status", status.clone()));
        }

        query
    }
}

/// Appointment booking request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    /// Doctor to book with
    pub doctor_id: i64,
    /// Requested slot (RFC 3339)
    pub scheduled_at: String,
    /// Consultation type ("chamber" or "telemedicine")
    pub consultation_type: Option<String>,
    /// Free-text notes for the doctor
    pub notes: Option<String>,
}

/// Appointment entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Appointment identifier
    pub id: i64,
    /// Doctor ID
    pub doctor_id: Option<i64>,
    /// Doctor display name
    pub doctor_name: Option<String>,
    /// Scheduled slot (RFC 3339)
    pub scheduled_at: Option<String>,
    /// Appointment status
    pub status: Option<String>,
    /// Consultation type
    pub consultation_type: Option<String>,
    /// Fee in BDT
    pub fee: Option<f64>,
}
