//! USPS Web Tools integration
//!
//! Domestic rates from the RateV4 API. USPS describes each postage offer
//! with a free-text `MailService` string; [`mail_service`] pulls the service,
//! box, hold-for-pickup flag and delivery days out of that text.
//!
//! API Documentation: https://www.usps.com/business/web-tools-apis/

mod client;
pub mod mail_service;
pub mod mapper;
mod models;
mod options;
pub mod request;

use once_cell::sync::Lazy;

use crate::domain::ShippingMethod;

pub use client::UspsService;
pub use mail_service::BoxName;
pub use options::{RateEstimateOptions, UspsPackageOptions};

pub const API_BASE: &str = "https://secure.shippingapis.com";
pub const TEST_API_BASE: &str = "https://stg-secure.shippingapis.com";

/// USPS mail classes, keyed by the service name prefix in `MailService`
pub static SHIPPING_METHODS: Lazy<Vec<ShippingMethod>> = Lazy::new(|| {
    [
        ("Priority Mail Express", "priority_express"),
        ("Priority Mail", "priority"),
        ("First-Class Mail", "first_class"),
        ("USPS Retail Ground", "retail_ground"),
        ("Media Mail", "media"),
        ("Library Mail", "library"),
    ]
    .into_iter()
    .map(|(name, code)| ShippingMethod::new(name, code).serving(true, false).from_countries(&["US"]).multi_package())
    .collect()
});
