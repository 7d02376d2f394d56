//! Reconex option types

use chrono::NaiveDate;

use crate::options::{impl_scoped_options, PackageOptionsSource};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconexPackageOptions {
    pub package_id: String,
    pub freight_class: Option<String>,
    pub stackable: bool,
    pub hazmat: bool,
}

impl_scoped_options!(ReconexPackageOptions, package_id);

/// Options for tendering a load
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOptions {
    /// Load mode code, one of the `SHIPPING_METHODS` service codes
    pub mode: String,
    pub pickup_date: NaiveDate,
    pub delivery_date: Option<NaiveDate>,
    pub equipment_type: String,
    pub customer_id: Option<String>,
    pub po_number: Option<String>,
    pub reference_numbers: Vec<String>,
    pub notes: Option<String>,
    pub package_options: Vec<ReconexPackageOptions>,
}

impl LoadOptions {
    pub fn new(pickup_date: NaiveDate) -> Self {
        LoadOptions {
            mode: "LTL".to_string(),
            pickup_date,
            delivery_date: None,
            equipment_type: "Van".to_string(),
            customer_id: None,
            po_number: None,
            reference_numbers: Vec::new(),
            notes: None,
            package_options: Vec::new(),
        }
    }
}

impl PackageOptionsSource for LoadOptions {
    type Package = ReconexPackageOptions;

    fn package_options(&self) -> &[ReconexPackageOptions] {
        &self.package_options
    }
}
