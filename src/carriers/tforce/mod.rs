//! TForce Freight LTL integration
//!
//! Rating and bill of lading creation against the TForce Freight JSON API.
//! Callers obtain the OAuth bearer token themselves and pass it in as the
//! access token credential.
//!
//! API Documentation: https://developer.tforcefreight.com

mod client;
pub mod mapper;
mod models;
mod options;
pub mod request;

use once_cell::sync::Lazy;

use crate::domain::ShippingMethod;

pub use client::TForceService;
pub use options::{BolOptions, BolReference, CommodityOverrides, RatesOptions, TForceCommodityOptions};

pub const API_BASE: &str = "https://api.tforcefreight.com";

/// TForce Freight service codes
pub static SHIPPING_METHODS: Lazy<Vec<ShippingMethod>> = Lazy::new(|| {
    [
        ("TForce Freight LTL", "308"),
        ("TForce Freight LTL - Guaranteed", "309"),
        ("TForce Freight LTL - Guaranteed A.M.", "334"),
        ("TForce Freight LTL - Standard", "349"),
    ]
    .into_iter()
    .map(|(name, code)| {
        ShippingMethod::new(name, code)
            .serving(true, false)
            .from_countries(&["US", "CA"])
            .multi_package()
    })
    .collect()
});
