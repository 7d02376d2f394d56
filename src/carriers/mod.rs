//! Carrier integrations
//!
//! Each carrier translates the carrier-agnostic shipment model into its own
//! wire format, makes one HTTP call per operation, and maps the response back
//! into rates, timings and shipment information.
//!
//! # Architecture
//!
//! ```text
//!                     ┌──────────────────────┐
//!                     │ CarrierService Trait │
//!                     └──────────┬───────────┘
//!                                │
//!   ┌──────┬──────┬──────────┬───┴───┬────────────┬────────┬─────────┬────────┐
//!   │      │      │          │       │            │        │         │        │
//! ┌─┴─┐ ┌──┴──┐ ┌─┴──┐ ┌─────┴─────┐ ┌┴─────┐ ┌────┴────┐ ┌─┴─────┐ ┌─┴──────┐
//! │R+L│ │ UPS │ │USPS│ │ShipEngine │ │TForce│ │UPS Frt. │ │Reconex│ │ G2Mint │
//! └───┘ └─────┘ └────┘ └───────────┘ └──────┘ └─────────┘ └───────┘ └────────┘
//! ```
//!
//! Per carrier: `request` builds payloads, `client` sends them through the
//! shared [`HttpClient`], `mapper` parses responses and error bodies.

pub mod http_client;
pub mod payload;
pub mod traits;

pub mod g2mint;
pub mod reconex;
pub mod rl;
pub mod ship_engine;
pub mod tforce;
pub mod ups;
pub mod ups_freight;
pub mod usps;

// Re-export commonly used types
pub use http_client::{HttpClient, HttpMethod, Request, Response};
pub use traits::{
    ApiError, ApiFailure, ApiResult, CarrierCredentials, CarrierResult, CarrierService, ConfigurableService,
    ServiceFactory, CARRIER_CODES,
};
