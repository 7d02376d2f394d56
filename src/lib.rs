//! Carrier Bridge
//!
//! Multi-carrier shipping client: rate quotes, transit timings, labels,
//! bills of lading and load tendering across R+L, UPS, UPS Freight, USPS,
//! ShipEngine, TForce Freight, Reconex and G2Mint, all against one
//! carrier-agnostic shipment model.

pub mod carriers;
pub mod config;
pub mod domain;
pub mod options;

pub use carriers::{ApiError, ApiFailure, ApiResult, CarrierCredentials, CarrierResult, CarrierService, ServiceFactory};
pub use config::Settings;
