//! Carrier-agnostic physical shipment model
//!
//! A shipment moves from an origin to a destination location. Its contents are
//! either loose packages or structures (pallets) holding packages; packages in
//! turn hold items. Every level carries an `id` so callers can attach
//! per-carrier option overrides to it (see [`crate::options`]).

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::units::{Dimensions, Weight};

// ============================================================================
// Location
// ============================================================================

/// Whether an address is a business or a home
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressType {
    #[default]
    Commercial,
    Residential,
}

/// A postal address with contact details
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub id: Option<String>,
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city: Option<String>,
    /// State or province code (e.g. "NC", "ON")
    pub region: Option<String>,
    /// ISO 3166 alpha-2 country code
    pub country: String,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address_type: AddressType,
}

impl Location {
    pub fn is_residential(&self) -> bool {
        self.address_type == AddressType::Residential
    }

    /// Non-empty street lines in order
    pub fn address_lines(&self) -> Vec<String> {
        [&self.address1, &self.address2, &self.address3]
            .into_iter()
            .flatten()
            .filter(|line| !line.trim().is_empty())
            .cloned()
            .collect()
    }

    /// Postal code truncated to the five-digit US form
    pub fn zip5(&self) -> Option<String> {
        self.zip.as_ref().map(|zip| zip.chars().take(5).collect())
    }
}

// ============================================================================
// Item / Package / Structure
// ============================================================================

/// A single article inside a package
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub id: String,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub weight: Weight,
    pub dimensions: Dimensions,
    pub cost: Option<Money>,
}

/// A box (or envelope, tube...) holding items
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
    pub id: String,
    pub description: Option<String>,
    pub dimensions: Dimensions,
    /// Weight of the empty container and void fill
    pub container_weight: Weight,
    pub items: Vec<Item>,
}

impl Package {
    /// Container weight plus all items
    pub fn weight(&self) -> Weight {
        self.items
            .iter()
            .map(|item| item.weight)
            .fold(self.container_weight, |acc, w| acc + w)
    }

    /// Declared value of the contents; `None` when no item carries a cost
    pub fn items_value(&self) -> Option<Money> {
        Money::sum(self.items.iter().filter_map(|item| item.cost.as_ref()))
    }
}

/// A pallet, skid or crate holding packages
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Structure {
    pub id: String,
    pub description: Option<String>,
    pub dimensions: Dimensions,
    pub empty_weight: Weight,
    pub packages: Vec<Package>,
}

impl Structure {
    pub fn weight(&self) -> Weight {
        self.packages
            .iter()
            .map(Package::weight)
            .fold(self.empty_weight, |acc, w| acc + w)
    }
}

// ============================================================================
// Shipment
// ============================================================================

/// Everything moving from `origin` to `destination` in one shipment
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Shipment {
    pub id: Option<String>,
    pub origin: Location,
    pub destination: Location,
    pub structures: Vec<Structure>,
    /// Loose packages not on a structure
    pub packages: Vec<Package>,
}

impl Shipment {
    /// Loose packages, or every structure's packages when there are none
    pub fn packages(&self) -> Vec<&Package> {
        if self.packages.is_empty() {
            self.structures.iter().flat_map(|s| s.packages.iter()).collect()
        } else {
            self.packages.iter().collect()
        }
    }

    /// Every item of every package
    pub fn items(&self) -> Vec<&Item> {
        self.packages().into_iter().flat_map(|p| p.items.iter()).collect()
    }

    pub fn weight(&self) -> Weight {
        if self.packages.is_empty() {
            self.structures.iter().map(Structure::weight).sum()
        } else {
            self.packages.iter().map(Package::weight).sum()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn package(id: &str, pounds: i64) -> Package {
        Package {
            id: id.to_string(),
            items: vec![Item {
                id: format!("{id}-item"),
                weight: Weight::pounds(pounds),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_package_weight_includes_container() {
        let mut pkg = package("p1", 3);
        pkg.container_weight = Weight::ounces(8);
        assert_eq!(pkg.weight().to_pounds(), Decimal::new(35, 1));
    }

    #[test]
    fn test_packages_fall_back_to_structures() {
        let shipment = Shipment {
            structures: vec![Structure {
                id: "pallet".to_string(),
                packages: vec![package("a", 1), package("b", 2)],
                ..Default::default()
            }],
            ..Default::default()
        };

        let ids: Vec<&str> = shipment.packages().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(shipment.weight().to_pounds(), Decimal::from(3));
    }

    #[test]
    fn test_address_lines_skip_blank() {
        let location = Location {
            address1: Some("1 Main St".to_string()),
            address2: Some("  ".to_string()),
            address3: Some("Suite 5".to_string()),
            ..Default::default()
        };
        assert_eq!(location.address_lines(), vec!["1 Main St", "Suite 5"]);
    }
}
