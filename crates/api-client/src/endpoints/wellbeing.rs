//! Wellbeing API endpoints
//!
//! Maps to `/wellbeing`: subscription wellbeing programs.

use crate::error::ApiResult;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};

/// Wellbeing API interface
#[derive(Clone)]
pub struct WellbeingApi {
    pub(crate) http: HttpClient,
}

impl WellbeingApi {
    /// Create a new wellbeing API interface
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List wellbeing programs
    ///
    /// GET /wellbeing/programs
    pub async fn programs(&self) -> ApiResult<Vec<WellbeingProgram>> {
        self.http.get("wellbeing/programs", &[]).await
    }

    /// Enroll in a program
    ///
    /// POST /wellbeing/enrollments
    pub async fn enroll(&self, request: &EnrollRequest) -> ApiResult<Enrollment> {
        self.http.post("wellbeing/enrollments", request).await
    }
}

/// Wellbeing program entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellbeingProgram {
    /// Program identifier
    pub id: i64,
    /// Program name
    pub name: Option<String>,
    /// Program description
    pub description: Option<String>,
    /// Program length in weeks
    pub duration_weeks: Option<u32>,
    /// Price in BDT
    pub price: Option<f64>,
}

/// Program enrollment request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    /// Program to enroll in
    pub program_id: i64,
}

/// Enrollment entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    /// Enrollment identifier
    pub id: String,
    /// Program ID
    pub program_id: Option<i64>,
    /// Enrollment status
    pub status: Option<String>,
    /// Enrollment timestamp (RFC 3339)
    pub enrolled_at: Option<String>,
}
