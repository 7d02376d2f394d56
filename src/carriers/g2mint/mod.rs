//! G2Mint LTL marketplace integration
//!
//! G2Mint returns quotes from several LTL carriers for one request. Each
//! quote becomes a rate on the matching service level.

mod client;
pub mod mapper;
mod models;
mod options;
pub mod request;

use once_cell::sync::Lazy;

use crate::domain::ShippingMethod;

pub use client::G2MintService;
pub use options::{G2MintPackageOptions, RateQuoteOptions};

pub const API_BASE: &str = "https://api.g2mint.com";

/// G2Mint service levels
pub static SHIPPING_METHODS: Lazy<Vec<ShippingMethod>> = Lazy::new(|| {
    [
        ("G2Mint LTL Standard", "standard"),
        ("G2Mint LTL Guaranteed", "guaranteed"),
        ("G2Mint LTL Expedited", "expedited"),
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
