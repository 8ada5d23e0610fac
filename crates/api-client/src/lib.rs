//! Typed client SDK for the LifePlus healthcare platform API
//!
//! This crate wraps the LifePlus REST API (v2) behind a single facade
//! client with automatic session management and one typed sub-client per
//! resource group.
//!
//! # Features
//!
//! - **Session lifecycle**: login / OTP verification / logout with bearer
//!   token handling
//! - **Partner authentication**: server-to-server `X-API-Key` /
//!   `X-Partner-ID` header pair via an async credential provider
//! - **Lazy sub-clients**: each resource group is constructed on first use
//!   and rebuilt whenever credentials change
//! - **Request correlation**: every request carries a unique `X-Request-ID`
//!
//! # Example
//!
//! ```rust,no_run
//! use lifeplus_api_client::LifePlusClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = LifePlusClient::new("https://api.lifeplusbd.com/api/v2")?;
//!
//!     // Browse without authentication
//!     let products = client.products().list(&Default::default()).await?;
//!     println!("{} products", products.len());
//!
//!     // Authenticate and place an order
//!     let session = client.login("01712345678", "secret").await?;
//!     println!("logged in: {}", session.data.is_some());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;

pub use client::{ClientOptions, LifePlusClient};
pub use config::{ApiKeyProvider, Configuration, PartnerCredentials};
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::{ClientOptions, LifePlusClient};
    pub use crate::config::{ApiKeyProvider, Configuration};
    pub use crate::endpoints::auth::{SessionRequest, SessionResponse};
    pub use crate::error::{ApiError, ApiResult};
}
