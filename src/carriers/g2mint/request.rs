//! G2Mint request payloads

use serde_json::{json, Value};

use super::options::RateQuoteOptions;
use crate::carriers::payload::{ceil_whole, compact, group_by};
use crate::domain::{Location, Shipment, Weight};
use crate::options::PackageOptionsSource;

fn lane(location: &Location) -> Value {
    json!({
        "postalCode": location.zip,
        "city": location.city,
        "state": location.region,
        "country": location.country,
        "residential": location.is_residential(),
    })
}

/// Packages grouped by freight class, one line item per class
fn line_items(shipment: &Shipment, options: &RateQuoteOptions) -> Vec<Value> {
    let groups = group_by(shipment.packages().into_iter().map(|package| {
        let package_options = options.options_for_package(package);
        ((package_options.freight_class.clone(), package_options.hazmat), package)
    }));

    groups
        .into_iter()
        .map(|((freight_class, hazmat), packages)| {
            let weight: Weight = packages.iter().map(|p| p.weight()).sum();
            json!({
                "freightClass": freight_class,
                "weight": ceil_whole(weight.to_pounds()),
                "weightUnit": "lb",
                "pieces": packages.len(),
                "hazmat": hazmat,
                "description": packages.iter().find_map(|p| p.description.clone()),
            })
        })
        .collect()
}

/// `rates/quote` body
pub fn serialize_rate_quote(shipment: &Shipment, options: &RateQuoteOptions) -> Value {
    compact(json!({
        "origin": lane(&shipment.origin),
        "destination": lane(&shipment.destination),
        "pickupDate": options.pickup_date.format("%Y-%m-%d").to_string(),
        "accessorials": options.accessorials,
        "lineItems": line_items(shipment, options),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carriers::g2mint::G2MintPackageOptions;
    use crate::domain::{Item, Package};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn package(id: &str, pounds: i64) -> Package {
        Package {
            id: id.to_string(),
            items: vec![Item {
                id: format!("{}-item", id),
                weight: Weight::pounds(pounds),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn shipment() -> Shipment {
        Shipment {
            origin: Location {
                zip: Some("60601".to_string()),
                country: "US".to_string(),
                ..Default::default()
            },
            destination: Location {
                zip: Some("98101".to_string()),
                country: "US".to_string(),
                ..Default::default()
            },
            packages: vec![package("a", 120), package("b", 80), package("c", 45)],
            ..Default::default()
        }
    }

    #[test]
    fn test_line_items_grouped_by_class() {
        let mut options = RateQuoteOptions::new(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        options.package_options = vec![G2MintPackageOptions {
            package_id: "c".to_string(),
            freight_class: Some("125".to_string()),
            ..Default::default()
        }];

        let payload = serialize_rate_quote(&shipment(), &options);

        assert_eq!(
            payload["lineItems"],
            json!([
                {"weight": 200, "weightUnit": "lb", "pieces": 2, "hazmat": false},
                {"freightClass": "125", "weight": 45, "weightUnit": "lb", "pieces": 1, "hazmat": false},
            ])
        );
        assert_eq!(payload["origin"], json!({"postalCode": "60601", "country": "US", "residential": false}));
        assert_eq!(payload["accessorials"], json!([]));
    }

    #[test]
    fn test_serialization_is_repeatable() {
        let options = RateQuoteOptions::new(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert_eq!(
            serialize_rate_quote(&shipment(), &options),
            serialize_rate_quote(&shipment(), &options)
        );
    }
}
