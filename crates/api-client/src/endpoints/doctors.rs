//! Doctors API endpoints
//!
//! Maps to `/doctors`: directory listing with specialty filter and search.

use crate::error::ApiResult;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};

/// Doctors API interface
#[derive(Clone)]
pub struct DoctorsApi {
    pub(crate) http: HttpClient,
}

impl DoctorsApi {
    /// Create a new doctors API interface
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List doctors with filters and pagination
    ///
    /// GET /doctors
    pub async fn list(&self, params: &ListDoctorsParams) -> ApiResult<Vec<Doctor>> {
        self.http.get("doctors", &params.to_query()).await
    }

    /// Get a single doctor by ID
    ///
    /// GET /doctors/{id}
    pub async fn get(&self, id: i64) -> ApiResult<Doctor> {
        self.http.get(&format!("doctors/{id}"), &[]).await
    }
}

/// Parameters for listing doctors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListDoctorsParams {
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Page size
    pub per_page: Option<u32>,
    /// Filter by specialty ID
    pub specialty_id: Option<i64>,
    /// Free-text search term
    pub search_key: Option<String>,
}

impl ListDoctorsParams {
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

    /// Filter by specialty
    #[must_use]
    pub fn with_specialty(mut self, specialty_id: i64) -> Self {
        self.specialty_id = Some(specialty_id);
        self
    }

    /// Set a search term
    #[must_use]
    pub fn with_search_key(mut self, search_key: impl Into<String>) -> Self {
        self.search_key = Some(search_key.into());
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
        if let Some(specialty_id) = self.specialty_id {
            query.push(("specialtyId", specialty_id.to_string()));
        }
        if let Some(ref search_key) = self.search_key {
            query.push(("searchKey", search_key.clone()));
        }

        query
    }
}

/// Doctor entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    /// Doctor identifier
    pub id: i64,
    /// Doctor name (without honorific)
    pub name: Option<String>,
    /// Specialty ID
    pub specialty_id: Option<i64>,
    /// Specialty display name
    pub specialty_name: Option<String>,
    /// Consultation fee in BDT
    pub consultation_fee: Option<f64>,
    /// Average rating (0-5)
    pub rating: Option<f64>,
    /// Primary hospital affiliation
    pub hospital_name: Option<String>,
    /// Years of experience
    pub years_of_experience: Option<u32>,
    /// Whether the doctor currently accepts telemedicine consultations
    pub telemedicine_available: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doctor_deserialize() {
        let json = r#"{
            "id": 42,
            "name": "Farhana Rahman",
            "specialtyId": 3,
            "specialtyName": "Cardiology",
            "consultationFee": 1200.0,
            "rating": 4.8,
            "hospitalName": "Square Hospital",
            "yearsOfExperience": 15,
            "telemedicineAvailable": true
        }"#;

        let doctor: Doctor = serde_json::from_str(json).unwrap();
        assert_eq!(doctor.specialty_name.as_deref(), Some("Cardiology"));
        assert_eq!(doctor.consultation_fee, Some(1200.0));
    }
}
