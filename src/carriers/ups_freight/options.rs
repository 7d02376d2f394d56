//! UPS Freight option types

use chrono::NaiveDate;

use crate::options::{impl_scoped_options, PackageOptionsSource};

/// Freight classification for one package
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpsFreightPackageOptions {
    pub package_id: String,
    pub freight_class: Option<String>,
    pub nmfc_prime: Option<String>,
    pub nmfc_sub: Option<String>,
    /// UPS Freight packaging code; "PLT" when unset
    pub packaging_type: Option<String>,
}

impl_scoped_options!(UpsFreightPackageOptions, package_id);

impl UpsFreightPackageOptions {
    pub fn packaging_code(&self) -> &str {
        self.packaging_type.as_deref().unwrap_or("PLT")
    }
}

/// Options for a ground freight rate request
#[derive(Debug, Clone, PartialEq)]
pub struct RatesOptions {
    pub service_code: String,
    pub pickup_date: NaiveDate,
    /// "10" prepaid, "30" bill to third party, "40" freight collect
    pub billing_option: String,
    /// Handling unit type reported in `HandlingUnitOne`
    pub handling_unit_type: String,
    pub package_options: Vec<UpsFreightPackageOptions>,
}

impl RatesOptions {
    pub fn new(pickup_date: NaiveDate) -> Self {
        RatesOptions {
            service_code: "308".to_string(),
            pickup_date,
            billing_option: "10".to_string(),
            handling_unit_type: "PLT".to_string(),
            package_options: Vec::new(),
        }
    }
}

impl PackageOptionsSource for RatesOptions {
    type Package = UpsFreightPackageOptions;

    fn package_options(&self) -> &[UpsFreightPackageOptions] {
        &self.package_options
    }
}
