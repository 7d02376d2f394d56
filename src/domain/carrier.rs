//! Carriers and the shipping methods they offer

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A named service level offered by a carrier (e.g. "Priority Mail Express")
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShippingMethod {
    pub name: String,
    pub service_code: String,
    pub origin_countries: Vec<String>,
    pub domestic: bool,
    pub international: bool,
    pub multi_package: bool,
}

impl ShippingMethod {
    pub fn new(name: &str, service_code: &str) -> Self {
        ShippingMethod {
            name: name.to_string(),
            service_code: service_code.to_string(),
            ..Default::default()
        }
    }

    pub fn serving(mut self, domestic: bool, international: bool) -> Self {
        self.domestic = domestic;
        self.international = international;
        self
    }

    pub fn from_countries(mut self, countries: &[&str]) -> Self {
        self.origin_countries = countries.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn multi_package(mut self) -> Self {
        self.multi_package = true;
        self
    }

    /// Whether this method can ship from `country`; an empty list means anywhere
    pub fn ships_from(&self, country: &str) -> bool {
        self.origin_countries.is_empty() || self.origin_countries.iter().any(|c| c == country)
    }
}

/// Find a method by service code in a static method list
pub fn find_by_service_code<'a>(methods: &'a [ShippingMethod], code: &str) -> Option<&'a ShippingMethod> {
    methods.iter().find(|m| m.service_code == code)
}

/// A carrier integration and its shipping methods
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Carrier {
    pub id: String,
    pub name: String,
    pub code: String,
    pub shipping_methods: Vec<ShippingMethod>,
    pub balance: Option<Money>,
    #[serde(default)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl Carrier {
    pub fn new(id: &str, name: &str, code: &str, shipping_methods: Vec<ShippingMethod>) -> Self {
        Carrier {
            id: id.to_string(),
            name: name.to_string(),
            code: code.to_string(),
            shipping_methods,
            ..Default::default()
        }
    }

    pub fn shipping_method(&self, service_code: &str) -> Option<&ShippingMethod> {
        find_by_service_code(&self.shipping_methods, service_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ships_from() {
        let method = ShippingMethod::new("Ground", "03").from_countries(&["US", "PR"]);
        assert!(method.ships_from("PR"));
        assert!(!method.ships_from("CA"));
        assert!(ShippingMethod::new("Any", "x").ships_from("CA"));
    }

    #[test]
    fn test_carrier_lookup() {
        let carrier = Carrier::new("se-1", "UPS", "ups", vec![ShippingMethod::new("UPS Ground", "ups_ground")]);
        assert_eq!(carrier.shipping_method("ups_ground").map(|m| m.name.as_str()), Some("UPS Ground"));
        assert!(carrier.shipping_method("nope").is_none());
    }
}
