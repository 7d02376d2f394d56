//! TForce Freight option types
//!
//! Commodity options are keyed by structure id, or by package id for
//! shipments of loose packages.

use chrono::NaiveDate;

use crate::options::{impl_scoped_options, PackageOptionsSource, StructureOptionsSource};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TForceCommodityOptions {
    pub commodity_id: String,
    pub freight_class: Option<String>,
    pub nmfc_prime: Option<String>,
    pub nmfc_sub: Option<String>,
    /// TForce packaging code; "PLT" when unset
    pub packaging_type: Option<String>,
    pub hazmat: bool,
}

impl_scoped_options!(TForceCommodityOptions, commodity_id);

impl TForceCommodityOptions {
    pub fn packaging_code(&self) -> &str {
        self.packaging_type.as_deref().unwrap_or("PLT")
    }
}

/// Commodity overrides shared by rate and BOL options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommodityOverrides {
    pub structure_options: Vec<TForceCommodityOptions>,
    pub package_options: Vec<TForceCommodityOptions>,
}

impl StructureOptionsSource for CommodityOverrides {
    type Structure = TForceCommodityOptions;

    fn structure_options(&self) -> &[TForceCommodityOptions] {
        &self.structure_options
    }
}

impl PackageOptionsSource for CommodityOverrides {
    type Package = TForceCommodityOptions;

    fn package_options(&self) -> &[TForceCommodityOptions] {
        &self.package_options
    }
}

/// Options for a rate request
#[derive(Debug, Clone, PartialEq)]
pub struct RatesOptions {
    pub service_code: String,
    pub pickup_date: NaiveDate,
    /// "10" prepaid, "30" collect
    pub billing_code: String,
    /// Pickup accessorial codes (e.g. "LIFO" liftgate at origin)
    pub pickup_services: Vec<String>,
    pub delivery_services: Vec<String>,
    pub commodities: CommodityOverrides,
}

impl RatesOptions {
    pub fn new(pickup_date: NaiveDate) -> Self {
        RatesOptions {
            service_code: "308".to_string(),
            pickup_date,
            billing_code: "10".to_string(),
            pickup_services: Vec::new(),
            delivery_services: Vec::new(),
            commodities: CommodityOverrides::default(),
        }
    }
}

/// Reference number printed on the BOL
#[derive(Debug, Clone, PartialEq)]
pub struct BolReference {
    /// TForce reference type (e.g. "PO", "BL")
    pub reference_type: String,
    pub number: String,
}

/// Options for creating a bill of lading
#[derive(Debug, Clone, PartialEq)]
pub struct BolOptions {
    pub service_code: String,
    pub pickup_date: NaiveDate,
    pub billing_code: String,
    pub references: Vec<BolReference>,
    pub handling_instructions: Option<String>,
    /// Request the BOL and label images in the response
    pub request_documents: bool,
    pub commodities: CommodityOverrides,
}

impl BolOptions {
    pub fn new(pickup_date: NaiveDate) -> Self {
        BolOptions {
            service_code: "308".to_string(),
            pickup_date,
            billing_code: "10".to_string(),
            references: Vec::new(),
            handling_instructions: None,
            request_documents: true,
            commodities: CommodityOverrides::default(),
        }
    }
}
