//! Facade client with session management
//!
//! [`LifePlusClient`] bundles the authentication lifecycle with lazy access
//! to every resource sub-client. Credential changes never mutate the active
//! [`Configuration`]; they build a fresh one and drop every cached
//! sub-client, so a sub-client is only ever used with the configuration
//! that was current when it was built.

use crate::config::{Configuration, PartnerCredentials};
use crate::endpoints::auth::{SessionRequest, SessionResponse, VerifyPhoneRequest};
use crate::endpoints::{
    AddressesApi, AmbulanceApi, AppointmentsApi, AuthApi, CartApi, DoctorsApi, HomeCareApi,
    HomeSampleApi, HospitalsApi, LookupApi, OrdersApi, PackagesApi, PartnersApi, ProductsApi,
    TelemedicineApi, WellbeingApi,
};
use crate::error::ApiResult;
use crate::http::HttpClient;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Optional construction parameters for [`LifePlusClient`]
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Bearer token obtained out-of-band
    pub access_token: Option<String>,
    /// Extra headers attached to every request
    pub headers: HashMap<String, String>,
}

/// Cached sub-client instances, dropped wholesale on every configuration
/// change.
#[derive(Default)]
struct ApiCache {
    auth: Option<AuthApi>,
    products: Option<ProductsApi>,
    doctors: Option<DoctorsApi>,
    hospitals: Option<HospitalsApi>,
    appointments: Option<AppointmentsApi>,
    orders: Option<OrdersApi>,
    cart: Option<CartApi>,
    packages: Option<PackagesApi>,
    addresses: Option<AddressesApi>,
    ambulance: Option<AmbulanceApi>,
    home_sample: Option<HomeSampleApi>,
    home_care: Option<HomeCareApi>,
    telemedicine: Option<TelemedicineApi>,
    wellbeing: Option<WellbeingApi>,
    partners: Option<PartnersApi>,
    lookup: Option<LookupApi>,
}

/// High-level client for the LifePlus healthcare platform API
///
/// Owns the active configuration, the current session, and the partner
/// credentials. Intended for single-caller use; methods that change
/// credentials take `&mut self` and invalidate every cached sub-client.
pub struct LifePlusClient {
    http: HttpClient,
    access_token: Option<String>,
    session: Option<SessionResponse>,
    partner_id: Option<String>,
    partner_api_key: Option<String>,
    apis: ApiCache,
}

impl LifePlusClient {
    /// Create a client for the given base URL with no credentials.
    ///
    /// ```rust,no_run
    /// use lifeplus_api_client::LifePlusClient;
    ///
    /// let client = LifePlusClient::new("https://api.lifeplusbd.com/api/v2").unwrap();
    /// ```
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Create a client with an out-of-band token and/or custom headers.
    pub fn with_options(base_url: impl Into<String>, options: ClientOptions) -> ApiResult<Self> {
        let mut config = Configuration::new(base_url).with_headers(options.headers);
        config.access_token = options.access_token.clone();

        let http = HttpClient::new(Arc::new(config))?;

        Ok(Self {
            http,
            access_token: options.access_token,
            session: None,
            partner_id: None,
            partner_api_key: None,
            apis: ApiCache::default(),
        })
    }

    // -------------------------------------------------------------------------
    // Session lifecycle
    // -------------------------------------------------------------------------

    /// Login with phone and password.
    ///
    /// On a token-bearing response the configuration is replaced (base path
    /// and headers carried over) and every cached sub-client is dropped.
    /// Server and transport errors propagate unchanged.
    pub async fn login(&mut self, phone: &str, password: &str) -> ApiResult<SessionResponse> {
        let request = SessionRequest {
            phone: phone.to_string(),
            password: password.to_string(),
        };

        let session = self.auth().create_session(&request).await?;
        self.adopt_session(session.clone())?;

        Ok(session)
    }

    /// Verify a phone number with an OTP code.
    ///
    /// Same contract as [`login`](Self::login), via OTP verification.
    pub async fn verify_phone(&mut self, phone: &str, otp: &str) -> ApiResult<SessionResponse> {
        let request = VerifyPhoneRequest {
            phone: phone.to_string(),
            otp: otp.to_string(),
        };

        let session = self.auth().verify_phone(&request).await?;
        self.adopt_session(session.clone())?;

        Ok(session)
    }

    /// Logout the current user.
    ///
    /// Calls the logout endpoint, clears token and session, and resets the
    /// configuration to an unauthenticated one. No-op when not
    /// authenticated.
    pub async fn logout(&mut self) -> ApiResult<()> {
        if self.access_token.is_none() {
            return Ok(());
        }

        self.auth().logout().await?;

        self.access_token = None;
        self.session = None;
        self.rebuild_with_token()
    }

    /// Set an access token obtained out-of-band.
    ///
    /// Rebuilds the configuration and sub-clients without a network call.
    pub fn set_access_token(&mut self, token: impl Into<String>) -> ApiResult<()> {
        self.access_token = Some(token.into());
        self.rebuild_with_token()
    }

    /// Set partner API credentials (server-to-server).
    ///
    /// Installs an async provider answering the API v2 partner header
    /// slots (`X-API-Key`, `X-Partner-ID`). An existing bearer token stays
    /// intact; both can be active at once.
    pub fn set_partner_credentials(
        &mut self,
        partner_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> ApiResult<()> {
        let partner_id = partner_id.into();
        let api_key = api_key.into();

        self.partner_id = Some(partner_id.clone());
        self.partner_api_key = Some(api_key.clone());

        let current = self.http.config();
        let config = Configuration {
            base_path: current.base_path.clone(),
            access_token: self.access_token.clone(),
            headers: current.headers.clone(),
            api_key: Some(Arc::new(PartnerCredentials::new(partner_id, api_key))),
            timeout: current.timeout,
        };

        self.swap_config(config)
    }

    /// Get the current access token.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Get the current session payload.
    #[must_use]
    pub fn session(&self) -> Option<&SessionResponse> {
        self.session.as_ref()
    }

    /// The stored partner credential pair, when set.
    #[must_use]
    pub fn partner_credentials(&self) -> Option<(&str, &str)> {
        match (&self.partner_id, &self.partner_api_key) {
            (Some(id), Some(key)) => Some((id.as_str(), key.as_str())),
            _ => None,
        }
    }

    /// Check whether a bearer token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// The configuration currently in effect.
    #[must_use]
    pub fn config(&self) -> &Arc<Configuration> {
        self.http.config()
    }

    // -------------------------------------------------------------------------
    // Configuration invalidation
    // -------------------------------------------------------------------------

    /// Adopt a session response: store it and, when it carries a token,
    /// swap in a token-bearing configuration.
    fn adopt_session(&mut self, session: SessionResponse) -> ApiResult<()> {
        if let Some(token) = session.data.as_ref().and_then(|d| d.token.clone()) {
            self.access_token = Some(token);
            self.rebuild_with_token()?;
        }

        self.session = Some(session);
        Ok(())
    }

    /// Rebuild the configuration from base path, headers, and the current
    /// token. Partner providers are not carried over; only
    /// [`set_partner_credentials`](Self::set_partner_credentials) installs
    /// one.
    fn rebuild_with_token(&mut self) -> ApiResult<()> {
        let current = self.http.config();
        let config = Configuration {
            base_path: current.base_path.clone(),
            access_token: self.access_token.clone(),
            headers: current.headers.clone(),
            api_key: None,
            timeout: current.timeout,
        };

        self.swap_config(config)
    }

    /// Swap in a new configuration and drop every cached sub-client.
    fn swap_config(&mut self, config: Configuration) -> ApiResult<()> {
        debug!(base_path = %config.base_path, "Replacing client configuration");

        self.http = HttpClient::new(Arc::new(config))?;
        self.apis = ApiCache::default();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Resource accessors
    // -------------------------------------------------------------------------

    /// Access authentication endpoints
    pub fn auth(&mut self) -> &AuthApi {
        self.apis
            .auth
            .get_or_insert_with(|| AuthApi::new(self.http.clone()))
    }

    /// Access product endpoints
    pub fn products(&mut self) -> &ProductsApi {
        self.apis
            .products
            .get_or_insert_with(|| ProductsApi::new(self.http.clone()))
    }

    /// Access doctor endpoints
    pub fn doctors(&mut self) -> &DoctorsApi {
        self.apis
            .doctors
            .get_or_insert_with(|| DoctorsApi::new(self.http.clone()))
    }

    /// Access hospital endpoints
    pub fn hospitals(&mut self) -> &HospitalsApi {
        self.apis
            .hospitals
            .get_or_insert_with(|| HospitalsApi::new(self.http.clone()))
    }

    /// Access appointment endpoints
    pub fn appointments(&mut self) -> &AppointmentsApi {
        self.apis
            .appointments
            .get_or_insert_with(|| AppointmentsApi::new(self.http.clone()))
    }

    /// Access order endpoints
    pub fn orders(&mut self) -> &OrdersApi {
        self.apis
            .orders
            .get_or_insert_with(|| OrdersApi::new(self.http.clone()))
    }

    /// Access cart endpoints
    pub fn cart(&mut self) -> &CartApi {
        self.apis
            .cart
            .get_or_insert_with(|| CartApi::new(self.http.clone()))
    }

    /// Access healthcare package endpoints
    pub fn packages(&mut self) -> &PackagesApi {
        self.apis
            .packages
            .get_or_insert_with(|| PackagesApi::new(self.http.clone()))
    }

    /// Access delivery address endpoints
    pub fn addresses(&mut self) -> &AddressesApi {
        self.apis
            .addresses
            .get_or_insert_with(|| AddressesApi::new(self.http.clone()))
    }

    /// Access ambulance dispatch endpoints
    pub fn ambulance(&mut self) -> &AmbulanceApi {
        self.apis
            .ambulance
            .get_or_insert_with(|| AmbulanceApi::new(self.http.clone()))
    }

    /// Access home sample collection endpoints
    pub fn home_sample(&mut self) -> &HomeSampleApi {
        self.apis
            .home_sample
            .get_or_insert_with(|| HomeSampleApi::new(self.http.clone()))
    }

    /// Access home care endpoints
    pub fn home_care(&mut self) -> &HomeCareApi {
        self.apis
            .home_care
            .get_or_insert_with(|| HomeCareApi::new(self.http.clone()))
    }

    /// Access telemedicine endpoints
    pub fn telemedicine(&mut self) -> &TelemedicineApi {
        self.apis
            .telemedicine
            .get_or_insert_with(|| TelemedicineApi::new(self.http.clone()))
    }

    /// Access wellbeing program endpoints
    pub fn wellbeing(&mut self) -> &WellbeingApi {
        self.apis
            .wellbeing
            .get_or_insert_with(|| WellbeingApi::new(self.http.clone()))
    }

    /// Access partner account endpoints
    pub fn partners(&mut self) -> &PartnersApi {
        self.apis
            .partners
            .get_or_insert_with(|| PartnersApi::new(self.http.clone()))
    }

    /// Access reference data endpoints
    pub fn lookup(&mut self) -> &LookupApi {
        self.apis
            .lookup
            .get_or_insert_with(|| LookupApi::new(self.http.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{API_KEY_AUTH, PARTNER_ID_AUTH};
    use crate::error::ApiError;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn session_body(token: Option<&str>) -> serde_json::Value {
        json!({
            "data": {
                "token": token,
                "user": {
                    "id": "u_1",
                    "name": "Test User",
                    "email": "test@lifeplusbd.com",
                    "phone": "01712345678",
                    "phoneVerified": true
                }
            },
            "message": "ok"
        })
    }

    #[tokio::test]
    async fn test_login_replaces_config_and_invalidates_sub_clients() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_body(Some("tok_123"))))
            .mount(&server)
            .await;

        let mut client = LifePlusClient::new(server.uri()).unwrap();
        assert!(!client.is_authenticated());

        let config_before = Arc::clone(client.products().http.config());

        let session = client.login("01712345678", "secret").await.unwrap();
        assert_eq!(
            session.data.unwrap().token.as_deref(),
            Some("tok_123")
        );
        assert!(client.is_authenticated());
        assert_eq!(client.access_token(), Some("tok_123"));
        assert!(client.session().is_some());

        // The cached sub-client was rebuilt against the new configuration.
        let config_after = Arc::clone(client.products().http.config());
        assert!(!Arc::ptr_eq(&config_before, &config_after));
        assert_eq!(config_after.access_token.as_deref(), Some("tok_123"));
    }

    #[tokio::test]
    async fn test_login_without_token_keeps_config() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"token": null, "user": null},
                "message": "OTP required"
            })))
            .mount(&server)
            .await;

        let mut client = LifePlusClient::new(server.uri()).unwrap();
        let config_before = Arc::clone(client.config());

        let session = client.login("01712345678", "secret").await.unwrap();
        assert!(session.data.unwrap().token.is_none());
        assert!(!client.is_authenticated());
        assert!(Arc::ptr_eq(&config_before, client.config()));
        // The session payload is still recorded.
        assert_eq!(
            client.session().unwrap().message.as_deref(),
            Some("OTP required")
        );
    }

    #[tokio::test]
    async fn test_verify_phone_adopts_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/verify-phone"))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_body(Some("tok_otp"))))
            .mount(&server)
            .await;

        let mut client = LifePlusClient::new(server.uri()).unwrap();
        client.verify_phone("01712345678", "4321").await.unwrap();

        assert_eq!(client.access_token(), Some("tok_otp"));
        assert_eq!(
            client.config().access_token.as_deref(),
            Some("tok_otp")
        );
    }

    #[tokio::test]
    async fn test_logout_clears_state() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_body(Some("tok_123"))))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/auth/logout"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "message": "logged out"})),
            )
            .mount(&server)
            .await;

        let mut client = LifePlusClient::new(server.uri()).unwrap();
        client.login("01712345678", "secret").await.unwrap();
        assert!(client.is_authenticated());

        client.logout().await.unwrap();

        assert!(!client.is_authenticated());
        assert!(client.access_token().is_none());
        assert!(client.session().is_none());
        assert!(client.config().access_token.is_none());
    }

    #[tokio::test]
    async fn test_logout_is_noop_when_unauthenticated() {
        // No server behind this address; a dispatched request would fail.
        let mut client = LifePlusClient::new("http://127.0.0.1:9").unwrap();
        client.logout().await.unwrap();
        assert!(!client.is_authenticated());
    }

    #[tokio::test]
    async fn test_set_access_token_rebuilds_without_network() {
        let mut client = LifePlusClient::new("http://127.0.0.1:9").unwrap();
        let config_before = Arc::clone(client.config());

        client.set_access_token("tok_oob").unwrap();

        assert!(client.is_authenticated());
        assert!(!Arc::ptr_eq(&config_before, client.config()));
        assert_eq!(client.config().access_token.as_deref(), Some("tok_oob"));
    }

    #[tokio::test]
    async fn test_partner_credentials_coexist_with_bearer_token() {
        let mut client = LifePlusClient::new("http://127.0.0.1:9").unwrap();
        client.set_access_token("tok_user").unwrap();
        client
            .set_partner_credentials("partner_42", "lpak_key")
            .unwrap();

        assert_eq!(
            client.partner_credentials(),
            Some(("partner_42", "lpak_key"))
        );

        let config = client.config();
        assert_eq!(config.access_token.as_deref(), Some("tok_user"));

        let provider = config.api_key.as_ref().unwrap();
        assert_eq!(provider.key(API_KEY_AUTH).await, "lpak_key");
        assert_eq!(provider.key(PARTNER_ID_AUTH).await, "partner_42");
    }

    #[tokio::test]
    async fn test_partner_headers_sent_on_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lookup/specialties"))
            .and(header("X-API-Key", "lpak_key"))
            .and(header("X-Partner-ID", "partner_42"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "name": "Cardiology"}])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut client = LifePlusClient::new(server.uri()).unwrap();
        client
            .set_partner_credentials("partner_42", "lpak_key")
            .unwrap();

        let specialties = client.lookup().specialties().await.unwrap();
        assert_eq!(specialties.len(), 1);
    }

    #[tokio::test]
    async fn test_sub_client_is_cached_between_calls() {
        let mut client = LifePlusClient::new("http://127.0.0.1:9").unwrap();

        let first = Arc::clone(client.products().http.config());
        let second = Arc::clone(client.products().http.config());
        assert!(Arc::ptr_eq(&first, &second));

        client.set_access_token("tok").unwrap();
        let third = Arc::clone(client.products().http.config());
        assert!(!Arc::ptr_eq(&first, &third));
    }

    #[tokio::test]
    async fn test_server_errors_propagate_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/sessions"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid credentials"))
            .mount(&server)
            .await;

        let mut client = LifePlusClient::new(server.uri()).unwrap();
        let error = client.login("01712345678", "wrong").await.unwrap_err();

        match error {
            ApiError::Api { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("invalid credentials"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!client.is_authenticated());
    }
}
