//! UPS Freight LTL integration
//!
//! Ground freight rating over the UPS Freight JSON API. Credentials travel
//! as `AccessLicenseNumber`/`Username`/`Password` headers on every call.

mod client;
pub mod mapper;
mod models;
mod options;
pub mod request;

use once_cell::sync::Lazy;

use crate::domain::ShippingMethod;

pub use client::UpsFreightService;
pub use options::{RatesOptions, UpsFreightPackageOptions};

pub const API_BASE: &str = "https://onlinetools.ups.com";
pub const TEST_API_BASE: &str = "https://wwwcie.ups.com";

/// UPS Freight service codes
pub static SHIPPING_METHODS: Lazy<Vec<ShippingMethod>> = Lazy::new(|| {
    [
        ("UPS Freight LTL", "308"),
        ("UPS Freight LTL - Guaranteed", "309"),
        ("UPS Freight LTL - Guaranteed A.M.", "334"),
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
