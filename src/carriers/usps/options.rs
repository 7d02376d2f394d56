//! USPS option types

use super::mail_service::BoxName;
use crate::options::{impl_scoped_options, PackageOptionsSource};

#[derive(Debug, Clone, PartialEq)]
pub struct UspsPackageOptions {
    pub package_id: String,
    pub box_name: BoxName,
    pub machinable: bool,
}

impl Default for UspsPackageOptions {
    fn default() -> Self {
        UspsPackageOptions {
            package_id: String::new(),
            box_name: BoxName::Variable,
            machinable: true,
        }
    }
}

impl_scoped_options!(UspsPackageOptions, package_id);

/// Options for a RateV4 call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateEstimateOptions {
    /// Select the hold-for-pickup variant of each offer
    pub hold_for_pickup: bool,
    pub package_options: Vec<UspsPackageOptions>,
}

impl PackageOptionsSource for RateEstimateOptions {
    type Package = UspsPackageOptions;

    fn package_options(&self) -> &[UspsPackageOptions] {
        &self.package_options
    }
}
