//! Authentication endpoints
//!
//! Maps to `/auth`:
//! - Create a session with phone + password
//! - Verify a phone number with an OTP code
//! - Logout the current session
//! - Fetch the authenticated user's profile
//!
//! The facade client drives these for its session lifecycle; they can also
//! be called directly.

use crate::endpoints::MessageResponse;
use crate::error::ApiResult;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};

/// Authentication API interface
#[derive(Clone)]
pub struct AuthApi {
    pub(crate) http: HttpClient,
}

impl AuthApi {
    /// Create a new auth API interface
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Create a session with phone and password
    ///
    /// POST /auth/sessions
    pub async fn create_session(&self, request: &SessionRequest) -> ApiResult<SessionResponse> {
        self.http.post("auth/sessions", request).await
    }

    /// Verify a phone number with an OTP code
    ///
    /// POST /auth/verify-phone
    pub async fn verify_phone(&self, request: &VerifyPhoneRequest) -> ApiResult<SessionResponse> {
        self.http.post("auth/verify-phone", request).await
    }

    /// Invalidate the current session
    ///
    /// POST /auth/logout
    pub async fn logout(&self) -> ApiResult<MessageResponse> {
        self.http.post_empty("auth/logout").await
    }

    /// Fetch the authenticated user's profile
    ///
    /// GET /auth/profile
    pub async fn profile(&self) -> ApiResult<UserProfile> {
        self.http.get("auth/profile", &[]).await
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Session creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    /// Phone number (e.g. `01712345678`)
    pub phone: String,
    /// Account password
    pub password: String,
}

/// OTP verification request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPhoneRequest {
    /// Phone number the OTP was sent to
    pub phone: String,
    /// OTP code received via SMS
    pub otp: String,
}

/// Session response
///
/// `data.token` is absent when the server requires a further step (e.g.
/// OTP verification after password login).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Session payload
    pub data: Option<SessionData>,
    /// Human-readable message from the server
    pub message: Option<String>,
}

/// Session payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    /// Bearer token for subsequent requests
    pub token: Option<String>,
    /// Authenticated user
    pub user: Option<UserProfile>,
}

/// User profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User identifier
    pub id: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// Phone number
    pub phone: Option<String>,
    /// Whether the phone number has been verified
    pub phone_verified: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_response_with_token() {
        let json = r#"{
            "data": {
                "token": "tok_abc123",
                "user": {
                    "id": "u_1",
                    "name": "Mamun",
                    "email": "mamun@lifeplusbd.com",
                    "phone": "01913705269",
                    "phoneVerified": true
                }
            },
            "message": "Login successful"
        }"#;

        let response: SessionResponse = serde_json::from_str(json).unwrap();
        let data = response.data.unwrap();
        assert_eq!(data.token.as_deref(), Some("tok_abc123"));
        assert_eq!(data.user.unwrap().phone_verified, Some(true));
    }

    #[test]
    fn test_session_response_without_token() {
        let json = r#"{"data": {"token": null, "user": null}, "message": "OTP required"}"#;

        let response: SessionResponse = serde_json::from_str(json).unwrap();
        assert!(response.data.unwrap().token.is_none());
        assert_eq!(response.message.as_deref(), Some("OTP required"));
    }
}
