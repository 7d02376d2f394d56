//! ShipEngine multi-carrier integration
//!
//! ShipEngine fronts many carriers behind one JSON API. Carriers connected
//! to the account are listed with their services; rates are estimated per
//! carrier id and labels are bought with a carrier id and service code.
//!
//! API Documentation: https://www.shipengine.com/docs/

mod client;
pub mod mapper;
mod models;
mod options;
pub mod request;

use once_cell::sync::Lazy;

use crate::domain::ShippingMethod;

pub use client::ShipEngineService;
pub use options::{Confirmation, LabelDownloadType, LabelOptions, RateEstimatesOptions, ShipEnginePackageOptions};

pub const API_BASE: &str = "https://api.shipengine.com";

/// Commonly connected ShipEngine services; accounts may expose more
pub static SHIPPING_METHODS: Lazy<Vec<ShippingMethod>> = Lazy::new(|| {
    let domestic = [
        ("USPS First Class Mail", "usps_first_class_mail"),
        ("USPS Priority Mail", "usps_priority_mail"),
        ("USPS Priority Mail Express", "usps_priority_mail_express"),
        ("USPS Media Mail", "usps_media_mail"),
        ("USPS Parcel Select Ground", "usps_parcel_select"),
        ("UPS Ground", "ups_ground"),
        ("UPS 3 Day Select", "ups_3_day_select"),
        ("UPS 2nd Day Air", "ups_2nd_day_air"),
        ("UPS Next Day Air", "ups_next_day_air"),
        ("FedEx Ground", "fedex_ground"),
        ("FedEx 2Day", "fedex_2day"),
        ("FedEx Standard Overnight", "fedex_standard_overnight"),
        ("FedEx Priority Overnight", "fedex_priority_overnight"),
    ];
    let international = [
        ("USPS Priority Mail International", "usps_priority_mail_international"),
        ("UPS Worldwide Saver", "ups_worldwide_saver"),
        ("FedEx International Economy", "fedex_international_economy"),
    ];

    domestic
        .into_iter()
        .map(|(name, code)| ShippingMethod::new(name, code).serving(true, false).from_countries(&["US"]))
        .chain(
            international
                .into_iter()
                .map(|(name, code)| ShippingMethod::new(name, code).serving(false, true).from_countries(&["US"])),
        )
        .collect()
});
