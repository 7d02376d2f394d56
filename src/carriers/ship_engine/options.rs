//! ShipEngine option types

use chrono::NaiveDate;

use crate::options::{impl_scoped_options, PackageOptionsSource};

/// Delivery confirmation requested for a shipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Confirmation {
    #[default]
    None,
    Delivery,
    Signature,
    AdultSignature,
    DirectSignature,
}

impl Confirmation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confirmation::None => "none",
            Confirmation::Delivery => "delivery",
            Confirmation::Signature => "signature",
            Confirmation::AdultSignature => "adult_signature",
            Confirmation::DirectSignature => "direct_signature",
        }
    }
}

/// How the label file is returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelDownloadType {
    #[default]
    Url,
    /// Base64 file contents in the response
    Inline,
}

impl LabelDownloadType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelDownloadType::Url => "url",
            LabelDownloadType::Inline => "inline",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipEnginePackageOptions {
    pub package_id: String,
    /// ShipEngine package code (e.g. "package", "flat_rate_envelope")
    pub package_code: Option<String>,
    /// Label messages, printed where the carrier supports them
    pub reference1: Option<String>,
    pub reference2: Option<String>,
    pub reference3: Option<String>,
}

impl_scoped_options!(ShipEnginePackageOptions, package_id);

/// Options for a rate estimate against one connected carrier
#[derive(Debug, Clone, PartialEq)]
pub struct RateEstimatesOptions {
    pub carrier_id: String,
    pub ship_date: Option<NaiveDate>,
    pub confirmation: Confirmation,
}

impl RateEstimatesOptions {
    pub fn new(carrier_id: impl Into<String>) -> Self {
        RateEstimatesOptions {
            carrier_id: carrier_id.into(),
            ship_date: None,
            confirmation: Confirmation::None,
        }
    }
}

/// Options for buying a label
#[derive(Debug, Clone, PartialEq)]
pub struct LabelOptions {
    pub carrier_id: String,
    pub service_code: String,
    pub ship_date: Option<NaiveDate>,
    pub confirmation: Confirmation,
    /// "pdf", "png" or "zpl"
    pub label_format: String,
    /// "4x6" or "letter"
    pub label_layout: String,
    pub download_type: LabelDownloadType,
    pub test_label: bool,
    pub package_options: Vec<ShipEnginePackageOptions>,
}

impl LabelOptions {
    pub fn new(carrier_id: impl Into<String>, service_code: impl Into<String>) -> Self {
        LabelOptions {
            carrier_id: carrier_id.into(),
            service_code: service_code.into(),
            ship_date: None,
            confirmation: Confirmation::None,
            label_format: "pdf".to_string(),
            label_layout: "4x6".to_string(),
            download_type: LabelDownloadType::Url,
            test_label: false,
            package_options: Vec::new(),
        }
    }
}

impl PackageOptionsSource for LabelOptions {
    type Package = ShipEnginePackageOptions;

    fn package_options(&self) -> &[ShipEnginePackageOptions] {
        &self.package_options
    }
}
