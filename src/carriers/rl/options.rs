//! R+L option types
//!
//! Structure options hold package options, which hold item options. Freight
//! class and NMFC codes are item-level; packaging type is package-level.

use chrono::{NaiveDate, NaiveTime};

use crate::carriers::traits::ApiError;
use crate::domain::Money;
use crate::options::{impl_scoped_options, ItemOptionsSource, PackageOptionsSource, StructureOptionsSource};

/// Accessorial codes accepted by the R+L API
pub const ADDITIONAL_SERVICE_CODES: [&str; 16] = [
    "OriginLiftgate",
    "DestinationLiftgate",
    "InsidePickup",
    "InsideDelivery",
    "LimitedAccessPickup",
    "LimitedAccessDelivery",
    "ResidentialPickup",
    "ResidentialDelivery",
    "Hazmat",
    "DeliveryNotification",
    "Freezable",
    "SortAndSegregate",
    "KeepFromFreezing",
    "OverDimension",
    "AirportPickup",
    "AirportDelivery",
];

fn validate_service_codes(codes: Vec<String>) -> Result<Vec<String>, ApiError> {
    match codes.iter().find(|c| !ADDITIONAL_SERVICE_CODES.contains(&c.as_str())) {
        Some(invalid) => Err(ApiError::InvalidOption(format!(
            "additional service code {:?} is not one of {}",
            invalid,
            ADDITIONAL_SERVICE_CODES.join(", ")
        ))),
        None => Ok(codes),
    }
}

// ============================================================================
// Entity options
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RlItemOptions {
    pub item_id: String,
    pub freight_class: Option<String>,
    pub nmfc_primary_code: Option<String>,
    pub nmfc_sub_code: Option<String>,
    pub hazmat: bool,
}

impl_scoped_options!(RlItemOptions, item_id);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RlPackageOptions {
    pub package_id: String,
    /// R+L package type code (e.g. "PLT", "BOX", "SKD")
    pub packaging_type: Option<String>,
    pub item_options: Vec<RlItemOptions>,
}

impl_scoped_options!(RlPackageOptions, package_id);

impl ItemOptionsSource for RlPackageOptions {
    type Item = RlItemOptions;

    fn item_options(&self) -> &[RlItemOptions] {
        &self.item_options
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RlStructureOptions {
    pub structure_id: String,
    pub package_options: Vec<RlPackageOptions>,
}

impl_scoped_options!(RlStructureOptions, structure_id);

impl PackageOptionsSource for RlStructureOptions {
    type Package = RlPackageOptions;

    fn package_options(&self) -> &[RlPackageOptions] {
        &self.package_options
    }
}

/// Structure and loose-package overrides shared by quote and BOL options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RlShipmentOverrides {
    pub structure_options: Vec<RlStructureOptions>,
    /// Options for packages not on a structure
    pub package_options: Vec<RlPackageOptions>,
}

impl StructureOptionsSource for RlShipmentOverrides {
    type Structure = RlStructureOptions;

    fn structure_options(&self) -> &[RlStructureOptions] {
        &self.structure_options
    }
}

impl PackageOptionsSource for RlShipmentOverrides {
    type Package = RlPackageOptions;

    fn package_options(&self) -> &[RlPackageOptions] {
        &self.package_options
    }
}

// ============================================================================
// Call options
// ============================================================================

/// Options for a rate quote
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuoteOptions {
    pub pickup_date: NaiveDate,
    pub declared_value: Option<Money>,
    pub overrides: RlShipmentOverrides,
    additional_service_codes: Vec<String>,
}

impl RateQuoteOptions {
    pub fn new(pickup_date: NaiveDate) -> Self {
        RateQuoteOptions {
            pickup_date,
            declared_value: None,
            overrides: RlShipmentOverrides::default(),
            additional_service_codes: Vec::new(),
        }
    }

    /// Set accessorials; rejects codes R+L does not know
    pub fn with_additional_services(mut self, codes: Vec<String>) -> Result<Self, ApiError> {
        self.additional_service_codes = validate_service_codes(codes)?;
        Ok(self)
    }

    pub fn with_overrides(mut self, overrides: RlShipmentOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn additional_service_codes(&self) -> &[String] {
        &self.additional_service_codes
    }
}

/// Options for a transit times lookup
#[derive(Debug, Clone, PartialEq)]
pub struct TransitTimesOptions {
    pub pickup_date: NaiveDate,
}

/// Reference numbers printed on the BOL
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BolReferenceNumbers {
    pub shipper_number: Option<String>,
    pub po_number: Option<String>,
}

/// Options for creating a bill of lading with a pickup request
#[derive(Debug, Clone, PartialEq)]
pub struct BolOptions {
    pub pickup_date: NaiveDate,
    /// Printed BOL date; the pickup date when unset
    pub bol_date: Option<NaiveDate>,
    pub pickup_ready_time: NaiveTime,
    pub pickup_close_time: NaiveTime,
    pub service_level: String,
    pub special_instructions: Option<String>,
    pub reference_numbers: BolReferenceNumbers,
    pub declared_value: Option<Money>,
    pub generate_universal_pro: bool,
    pub overrides: RlShipmentOverrides,
    additional_service_codes: Vec<String>,
}

impl BolOptions {
    pub fn new(pickup_date: NaiveDate) -> Self {
        BolOptions {
            pickup_date,
            bol_date: None,
            pickup_ready_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            pickup_close_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
            service_level: "STD".to_string(),
            special_instructions: None,
            reference_numbers: BolReferenceNumbers::default(),
            declared_value: None,
            generate_universal_pro: true,
            overrides: RlShipmentOverrides::default(),
            additional_service_codes: Vec::new(),
        }
    }

    pub fn with_additional_services(mut self, codes: Vec<String>) -> Result<Self, ApiError> {
        self.additional_service_codes = validate_service_codes(codes)?;
        Ok(self)
    }

    pub fn with_overrides(mut self, overrides: RlShipmentOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn additional_service_codes(&self) -> &[String] {
        &self.additional_service_codes
    }
}

/// Options for printing shipping labels
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingLabelOptions {
    /// Label sheet layout (1 = 4x6 thermal, 2 = Avery 6x4 sheet)
    pub style: u8,
    pub start_position: u8,
    pub number_of_labels: u8,
}

impl Default for ShippingLabelOptions {
    fn default() -> Self {
        ShippingLabelOptions {
            style: 1,
            start_position: 1,
            number_of_labels: 4,
        }
    }
}
