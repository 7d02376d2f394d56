//! Common test utilities and fixtures
//!
//! - fixture bodies under `tests/fixtures/<carrier>/`
//! - wiremock for HTTP mocking (isolated, parallel-safe)
//! - shipment builders shared by the carrier suites

#![allow(dead_code)]

use carrier_bridge::domain::{AddressType, Dimensions, Item, Location, Package, Shipment, Structure, Weight};
use chrono::NaiveDate;
use std::path::PathBuf;

/// Read `tests/fixtures/<carrier>/<name>`
pub fn fixture(carrier: &str, name: &str) -> String {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures", carrier, name].iter().collect();
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("missing fixture {}: {}", path.display(), e))
}

pub fn pickup_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
}

pub fn origin() -> Location {
    Location {
        id: Some("warehouse".to_string()),
        name: Some("Shipping Dept".to_string()),
        company_name: Some("Fixture Supply Co".to_string()),
        address1: Some("1200 Commerce Dr".to_string()),
        city: Some("Wilmington".to_string()),
        region: Some("OH".to_string()),
        country: "US".to_string(),
        zip: Some("45177".to_string()),
        phone: Some("937-555-0100".to_string()),
        ..Default::default()
    }
}

pub fn destination() -> Location {
    Location {
        id: Some("store".to_string()),
        name: Some("Receiving".to_string()),
        company_name: Some("Queen City Outfitters".to_string()),
        address1: Some("400 S Tryon St".to_string()),
        city: Some("Charlotte".to_string()),
        region: Some("NC".to_string()),
        country: "US".to_string(),
        zip: Some("28202-1934".to_string()),
        address_type: AddressType::Commercial,
        ..Default::default()
    }
}

pub fn package(id: &str, pounds: i64) -> Package {
    Package {
        id: id.to_string(),
        description: Some("Store fixtures".to_string()),
        dimensions: Dimensions::inches(24, 18, 12),
        container_weight: Weight::pounds(1),
        items: vec![Item {
            id: format!("{}-item", id),
            description: Some("Display shelf".to_string()),
            weight: Weight::pounds(pounds),
            ..Default::default()
        }],
    }
}

/// Two loose parcels
pub fn parcel_shipment() -> Shipment {
    Shipment {
        id: Some("parcel-1".to_string()),
        origin: origin(),
        destination: destination(),
        packages: vec![package("pkg-1", 2), package("pkg-2", 5)],
        ..Default::default()
    }
}

/// Two pallets of 390 lbs each, including the pallet itself
pub fn freight_shipment() -> Shipment {
    let pallet = |id: &str| Structure {
        id: id.to_string(),
        description: Some("Pallet".to_string()),
        dimensions: Dimensions::inches(48, 40, 50),
        empty_weight: Weight::pounds(40),
        packages: vec![package(&format!("{}-a", id), 174), package(&format!("{}-b", id), 174)],
    };

    Shipment {
        id: Some("freight-1".to_string()),
        origin: origin(),
        destination: destination(),
        structures: vec![pallet("pallet-1"), pallet("pallet-2")],
        ..Default::default()
    }
}
