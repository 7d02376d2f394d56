//! Priced offers and transit timings parsed from carrier responses

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::carrier::ShippingMethod;
use super::money::Money;

/// Arbitrary carrier-specific data attached to a parsed object
pub type DataBag = serde_json::Map<String, serde_json::Value>;

/// A priced shipping offer for one shipping method
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rate {
    pub shipping_method: ShippingMethod,
    /// Charge name (or package id) to amount
    pub amounts: BTreeMap<String, Money>,
    pub remote_service_id: Option<String>,
    pub delivery_date: Option<NaiveDateTime>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub data: DataBag,
}

impl Rate {
    pub fn new(shipping_method: ShippingMethod, amounts: BTreeMap<String, Money>) -> Self {
        Rate {
            shipping_method,
            amounts,
            ..Default::default()
        }
    }

    /// Sum of all amounts; `None` when empty or in mixed currencies
    pub fn total_amount(&self) -> Option<Money> {
        Money::sum(self.amounts.values())
    }
}

/// Estimated pickup and delivery for one shipping method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub shipping_method: ShippingMethod,
    pub pickup: NaiveDate,
    pub delivery: NaiveDateTime,
    pub guaranteed: bool,
    pub warnings: Vec<String>,
    pub data: DataBag,
}

impl Timing {
    pub fn new(shipping_method: ShippingMethod, pickup: NaiveDate, delivery: NaiveDateTime) -> Self {
        Timing {
            shipping_method,
            pickup,
            delivery,
            guaranteed: false,
            warnings: Vec::new(),
            data: DataBag::new(),
        }
    }

    /// Calendar days between pickup and delivery
    pub fn days_in_transit(&self) -> i64 {
        (self.delivery.date() - self.pickup).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_amount() {
        let mut amounts = BTreeMap::new();
        amounts.insert("shipping".to_string(), Money::from_cents(1000, "USD"));
        amounts.insert("insurance".to_string(), Money::from_cents(250, "USD"));
        let rate = Rate::new(ShippingMethod::new("Ground", "gnd"), amounts);

        assert_eq!(rate.total_amount(), Some(Money::from_cents(1250, "USD")));
    }

    #[test]
    fn test_days_in_transit() {
        let pickup = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let delivery = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap().and_hms_opt(10, 30, 0).unwrap();
        let timing = Timing::new(ShippingMethod::default(), pickup, delivery);

        assert_eq!(timing.days_in_transit(), 3);
    }
}
