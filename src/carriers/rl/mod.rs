//! R+L Carriers LTL integration
//!
//! Rate quotes, transit times, bills of lading and document printing against
//! the R+L JSON API. Freight class and NMFC codes come from item options.
//!
//! API Documentation: https://api.rlc.com

mod client;
pub mod mapper;
mod models;
mod options;
pub mod request;

use once_cell::sync::Lazy;

use crate::domain::ShippingMethod;

pub use client::RlService;
pub use options::{
    BolOptions, BolReferenceNumbers, RateQuoteOptions, RlItemOptions, RlPackageOptions, RlShipmentOverrides,
    RlStructureOptions, ShippingLabelOptions, TransitTimesOptions, ADDITIONAL_SERVICE_CODES,
};

pub const API_BASE: &str = "https://api.rlc.com";

/// R+L service levels
pub static SHIPPING_METHODS: Lazy<Vec<ShippingMethod>> = Lazy::new(|| {
    [
        ("Standard Service", "STD"),
        ("Guaranteed Service", "GSDS"),
        ("Guaranteed AM Service", "GAMS"),
        ("Guaranteed Hourly Window Service", "GHTW"),
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
