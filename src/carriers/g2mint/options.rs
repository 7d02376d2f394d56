//! G2Mint option types

use chrono::NaiveDate;

use crate::options::{impl_scoped_options, PackageOptionsSource};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct G2MintPackageOptions {
    pub package_id: String,
    pub freight_class: Option<String>,
    pub hazmat: bool,
}

impl_scoped_options!(G2MintPackageOptions, package_id);

#[derive(Debug, Clone, PartialEq)]
pub struct RateQuoteOptions {
    pub pickup_date: NaiveDate,
    /// Accessorial codes (e.g. "liftgate_delivery", "residential_delivery")
    pub accessorials: Vec<String>,
    pub package_options: Vec<G2MintPackageOptions>,
}

impl RateQuoteOptions {
    pub fn new(pickup_date: NaiveDate) -> Self {
        RateQuoteOptions {
            pickup_date,
            accessorials: Vec::new(),
            package_options: Vec::new(),
        }
    }
}

impl PackageOptionsSource for RateQuoteOptions {
    type Package = G2MintPackageOptions;

    fn package_options(&self) -> &[G2MintPackageOptions] {
        &self.package_options
    }
}
