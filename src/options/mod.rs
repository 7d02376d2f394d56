//! Per-entity option overrides
//!
//! Carrier options form a chain: shipment options hold structure options,
//! structure options hold package options, package options hold item options.
//! Each level is looked up by the id of the structure/package/item being
//! serialized. A missing override resolves to a freshly built default for that
//! id, so lookups never fail and callers only list the entities they want to
//! customize.
//!
//! ```text
//!  ShipmentOptions ──▶ [StructureOptions] ──▶ [PackageOptions] ──▶ [ItemOptions]
//!         │                   │                     │                   │
//!   options_for_structure  options_for_package  options_for_item   (leaf)
//! ```

use std::borrow::Cow;

use crate::domain::{Item, Package, Structure};

/// Options attached to one structure, package or item by id
pub trait ScopedOptions: Clone {
    /// Id of the entity these options apply to
    fn scope_id(&self) -> &str;

    /// Default options for an entity with no override
    fn default_for(id: &str) -> Self;
}

/// Linear scan for the override matching `id`, or a default for it
pub fn resolve<'a, T: ScopedOptions>(overrides: &'a [T], id: &str) -> Cow<'a, T> {
    match overrides.iter().find(|o| o.scope_id() == id) {
        Some(found) => Cow::Borrowed(found),
        None => Cow::Owned(T::default_for(id)),
    }
}

/// Options that carry per-structure overrides
pub trait StructureOptionsSource {
    type Structure: ScopedOptions;

    fn structure_options(&self) -> &[Self::Structure];

    fn options_for_structure(&self, structure: &Structure) -> Cow<'_, Self::Structure> {
        resolve(self.structure_options(), &structure.id)
    }
}

/// Options that carry per-package overrides
pub trait PackageOptionsSource {
    type Package: ScopedOptions;

    fn package_options(&self) -> &[Self::Package];

    fn options_for_package(&self, package: &Package) -> Cow<'_, Self::Package> {
        resolve(self.package_options(), &package.id)
    }
}

/// Options that carry per-item overrides
pub trait ItemOptionsSource {
    type Item: ScopedOptions;

    fn item_options(&self) -> &[Self::Item];

    fn options_for_item(&self, item: &Item) -> Cow<'_, Self::Item> {
        resolve(self.item_options(), &item.id)
    }
}

/// Implement [`ScopedOptions`] for a `Default` options struct keyed by `$field`
macro_rules! impl_scoped_options {
    ($ty:ty, $field:ident) => {
        impl $crate::options::ScopedOptions for $ty {
            fn scope_id(&self) -> &str {
                &self.$field
            }

            fn default_for(id: &str) -> Self {
                Self {
                    $field: id.to_string(),
                    ..Default::default()
                }
            }
        }
    };
}

pub(crate) use impl_scoped_options;
