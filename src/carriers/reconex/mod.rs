//! Reconex load tendering integration
//!
//! Reconex books freight as loads rather than quoting rates: a load is
//! created from a shipment and later looked up by id for its status, PRO and
//! BOL numbers.

mod client;
pub mod mapper;
mod models;
mod options;
pub mod request;

use once_cell::sync::Lazy;

use crate::domain::ShippingMethod;

pub use client::ReconexService;
pub use options::{LoadOptions, ReconexPackageOptions};

pub const API_BASE: &str = "https://api.reconex.com";

/// Reconex load modes
pub static SHIPPING_METHODS: Lazy<Vec<ShippingMethod>> = Lazy::new(|| {
    [
        ("Reconex LTL", "LTL"),
        ("Reconex Truckload", "TL"),
        ("Reconex Partial Truckload", "PTL"),
    ]
    .into_iter()
    .map(|(name, code)| {
        ShippingMethod::new(name, code)
            .serving(true, false)
            .from_countries(&["US"])
            .multi_package()
    })
    .collect()
});
