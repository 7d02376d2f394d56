//! UPS small-package integration
//!
//! Rating, time in transit and label creation over the UPS XML API. Every
//! call posts two documents in one body: an `AccessRequest` carrying the
//! license and user credentials, followed by the request document itself.
//!
//! API Documentation: https://www.ups.com/upsdeveloperkit

mod client;
pub mod mapper;
mod models;
mod options;
pub mod request;

use once_cell::sync::Lazy;

use crate::domain::ShippingMethod;

pub use client::UpsService;
pub use options::{
    DeliveryConfirmation, LabelOptions, LabelSize, RateEstimateOptions, ReferenceNumber, TimingsOptions,
    UpsPackageOptions,
};

pub const API_BASE: &str = "https://onlinetools.ups.com";
pub const TEST_API_BASE: &str = "https://wwwcie.ups.com";

/// UPS rating service codes
pub static SHIPPING_METHODS: Lazy<Vec<ShippingMethod>> = Lazy::new(|| {
    let domestic = [
        ("UPS Next Day Air", "01"),
        ("UPS Second Day Air", "02"),
        ("UPS Ground", "03"),
        ("UPS Three-Day Select", "12"),
        ("UPS Next Day Air Saver", "13"),
        ("UPS Next Day Air Early A.M.", "14"),
        ("UPS Second Day Air A.M.", "59"),
    ];
    let international = [
        ("UPS Worldwide Express", "07"),
        ("UPS Worldwide Expedited", "08"),
        ("UPS Standard", "11"),
        ("UPS Worldwide Express Plus", "54"),
        ("UPS Saver", "65"),
    ];

    let method = |(name, code): (&str, &str), domestic: bool| {
        ShippingMethod::new(name, code)
            .serving(domestic, !domestic)
            .from_countries(&["US"])
            .multi_package()
    };

    domestic
        .into_iter()
        .map(|m| method(m, true))
        .chain(international.into_iter().map(|m| method(m, false)))
        .collect()
});

/// Time in transit service summary code to rating service code
pub const TRANSIT_SERVICE_CODES: [(&str, &str); 14] = [
    ("1DM", "14"),
    ("1DMS", "14"),
    ("1DA", "01"),
    ("1DAS", "01"),
    ("1DP", "13"),
    ("2DM", "59"),
    ("2DA", "02"),
    ("2DAS", "02"),
    ("3DS", "12"),
    ("GND", "03"),
    ("01", "07"),
    ("05", "08"),
    ("21", "54"),
    ("28", "65"),
];
