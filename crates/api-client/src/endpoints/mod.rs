//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for one resource group of the
//! LifePlus API (v2).
//!
//! ## Mapping to the REST API
//!
//! | Module | Resource | Description |
//! |--------|----------|-------------|
//! | `auth` | `/auth` | Sessions, OTP verification, profile |
//! | `products` | `/products` | Pharmacy and lifestyle products |
//! | `doctors` | `/doctors` | Doctor directory |
//! | `hospitals` | `/hospitals` | Hospital directory |
//! | `appointments` | `/appointments` | Doctor appointments |
//! | `orders` | `/orders` | Order placement and history |
//! | `cart` | `/cart` | Shopping cart |
//! | `packages` | `/packages` | Healthcare packages |
//! | `addresses` | `/addresses` | Delivery addresses |
//! | `ambulance` | `/ambulance` | Ambulance dispatch |
//! | `home_sample` | `/home-sample` | At-home lab sample collection |
//! | `home_care` | `/home-care` | Home nursing services |
//! | `telemedicine` | `/telemedicine` | Remote consultations |
//! | `wellbeing` | `/wellbeing` | Wellbeing programs |
//! | `partners` | `/partners` | Partner account endpoints |
//! | `lookup` | `/lookup` | Reference data |

pub mod addresses;
pub mod ambulance;
pub mod appointments;
pub mod auth;
pub mod cart;
pub mod doctors;
pub mod home_care;
pub mod home_sample;
pub mod hospitals;
pub mod lookup;
pub mod orders;
pub mod packages;
pub mod partners;
pub mod products;
pub mod telemedicine;
pub mod wellbeing;

pub use addresses::AddressesApi;
pub use ambulance::AmbulanceApi;
pub use appointments::AppointmentsApi;
pub use auth::AuthApi;
pub use cart::CartApi;
pub use doctors::DoctorsApi;
pub use home_care::HomeCareApi;
pub use home_sample::HomeSampleApi;
pub use hospitals::HospitalsApi;
pub use lookup::LookupApi;
pub use orders::OrdersApi;
pub use packages::PackagesApi;
pub use partners::PartnersApi;
pub use products::ProductsApi;
pub use telemedicine::TelemedicineApi;
pub use wellbeing::WellbeingApi;

use serde::{Deserialize, Serialize};

/// Generic acknowledgement returned by mutating endpoints without a richer
/// payload (logout, cancellations, deletions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Whether the operation succeeded
    pub success: Option<bool>,
    /// Human-readable message from the server
    pub message: Option<String>,
}
