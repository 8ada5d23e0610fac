//! Telemedicine API endpoints
//!
//! Maps to `/telemedicine`: remote consultations.

use crate::error::ApiResult;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};

/// Telemedicine API interface
#[derive(Clone)]
pub struct TelemedicineApi {
    pub(crate) http: HttpClient,
}

impl TelemedicineApi {
    /// Create a new telemedicine API interface
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Start a remote consultation
    ///
    /// POST /telemedicine/consultations
    pub async fn start(&self, request: &StartConsultationRequest) -> ApiResult<Consultation> {
        self.http.post("telemedicine/consultations", request).await
    }

    /// List the user's consultations
    ///
    /// GET /telemedicine/consultations
    pub async fn consultations(&self) -> ApiResult<Vec<Consultation>> {
        self.http.get("telemedicine/consultations", &[]).await
    }
}

/// Consultation start request
///
/// Either a specific doctor or a specialty must be given; the server
/// assigns an available doctor when only a specialty is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartConsultationRequest {
    /// Specific doctor to consult
    pub doctor_id: Option<i64>,
    /// Specialty to be matched against available doctors
    pub specialty_id: Option<i64>,
    /// Symptoms or notes for the doctor
    pub notes: Option<String>,
}

/// Consultation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consultation {
    /// Consultation identifier
    pub id: String,
    /// Doctor ID
    pub doctor_id: Option<i64>,
    /// Doctor display name
    pub doctor_name: Option<String>,
    /// Consultation status
    pub status: Option<String>,
    /// Start timestamp (RFC 3339)
    pub started_at: Option<String>,
    /// Join URL for the video session
    pub join_url: Option<String>,
}
