//! UPS option types

use chrono::NaiveDate;

use crate::carriers::traits::ApiError;
use crate::domain::Money;
use crate::options::{impl_scoped_options, PackageOptionsSource};

/// Package-level delivery confirmation (`DCISType`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryConfirmation {
    DeliveryConfirmation,
    SignatureRequired,
    AdultSignatureRequired,
}

impl DeliveryConfirmation {
    /// Parse a UPS `DCISType` code
    pub fn from_code(code: &str) -> Result<Self, ApiError> {
        match code {
            "1" => Ok(DeliveryConfirmation::DeliveryConfirmation),
            "2" => Ok(DeliveryConfirmation::SignatureRequired),
            "3" => Ok(DeliveryConfirmation::AdultSignatureRequired),
            other => Err(ApiError::InvalidOption(format!(
                "delivery confirmation {:?} is not one of 1, 2, 3",
                other
            ))),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DeliveryConfirmation::DeliveryConfirmation => "1",
            DeliveryConfirmation::SignatureRequired => "2",
            DeliveryConfirmation::AdultSignatureRequired => "3",
        }
    }
}

/// Reference number printed on a package label
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceNumber {
    /// UPS reference code (e.g. "PO", "IK")
    pub code: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpsPackageOptions {
    pub package_id: String,
    /// UPS packaging code; "02" (customer supplied) when unset
    pub packaging_type: Option<String>,
    pub reference_numbers: Vec<ReferenceNumber>,
    pub delivery_confirmation: Option<DeliveryConfirmation>,
}

impl_scoped_options!(UpsPackageOptions, package_id);

impl UpsPackageOptions {
    pub fn packaging_code(&self) -> &str {
        self.packaging_type.as_deref().unwrap_or("02")
    }
}

/// Options for a rate shop
#[derive(Debug, Clone, PartialEq)]
pub struct RateEstimateOptions {
    /// "01" daily pickup, "03" customer counter
    pub pickup_type: String,
    pub customer_classification: Option<String>,
    /// Request negotiated (account) rates; needs a shipper number
    pub negotiated_rates: bool,
    pub package_options: Vec<UpsPackageOptions>,
}

impl Default for RateEstimateOptions {
    fn default() -> Self {
        RateEstimateOptions {
            pickup_type: "01".to_string(),
            customer_classification: None,
            negotiated_rates: false,
            package_options: Vec::new(),
        }
    }
}

impl PackageOptionsSource for RateEstimateOptions {
    type Package = UpsPackageOptions;

    fn package_options(&self) -> &[UpsPackageOptions] {
        &self.package_options
    }
}

/// Options for a time in transit lookup
#[derive(Debug, Clone, PartialEq)]
pub struct TimingsOptions {
    pub pickup_date: NaiveDate,
    /// Declared invoice total, required for international lanes
    pub invoice_total: Option<Money>,
}

/// Thermal label stock, in inches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSize {
    pub width: u32,
    pub height: u32,
}

impl Default for LabelSize {
    fn default() -> Self {
        LabelSize { width: 4, height: 6 }
    }
}

/// Options for creating labels
#[derive(Debug, Clone, PartialEq)]
pub struct LabelOptions {
    pub service_code: String,
    pub description: Option<String>,
    /// Print method: "GIF" for images, or a thermal language ("EPL", "ZPL", "SPL")
    pub label_format: String,
    /// Stock size sent with thermal print methods
    pub label_size: LabelSize,
    pub package_options: Vec<UpsPackageOptions>,
}

impl LabelOptions {
    pub fn new(service_code: impl Into<String>) -> Self {
        LabelOptions {
            service_code: service_code.into(),
            description: None,
            label_format: "GIF".to_string(),
            label_size: LabelSize::default(),
            package_options: Vec::new(),
        }
    }
}

impl PackageOptionsSource for LabelOptions {
    type Package = UpsPackageOptions;

    fn package_options(&self) -> &[UpsPackageOptions] {
        &self.package_options
    }
}
