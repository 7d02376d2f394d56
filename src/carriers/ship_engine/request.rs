//! ShipEngine request payloads

use serde_json::{json, Value};

use super::options::{LabelOptions, RateEstimatesOptions};
use crate::carriers::payload::{compact, decimal_number};
use crate::domain::{Dimensions, Location, Package, Shipment, Weight};
use crate::options::PackageOptionsSource;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn residential_indicator(location: &Location) -> &'static str {
    if location.is_residential() {
        "yes"
    } else {
        "no"
    }
}

fn weight(weight: Weight) -> Value {
    json!({
        "value": decimal_number(weight.to_ounces()),
        "unit": "ounce",
    })
}

fn dimensions(dimensions: &Dimensions) -> Value {
    if dimensions.is_zero() {
        return Value::Null;
    }
    json!({
        "unit": "inch",
        "length": decimal_number(dimensions.length.to_inches()),
        "width": decimal_number(dimensions.width.to_inches()),
        "height": decimal_number(dimensions.height.to_inches()),
    })
}

fn address(location: &Location) -> Value {
    json!({
        "name": location.name.as_ref().or(location.company_name.as_ref()),
        "company_name": location.company_name,
        "phone": location.phone,
        "email": location.email,
        "address_line1": location.address1,
        "address_line2": location.address2,
        "address_line3": location.address3,
        "city_locality": location.city,
        "state_province": location.region,
        "postal_code": location.zip,
        "country_code": location.country,
        "address_residential_indicator": residential_indicator(location),
    })
}

/// `rates/estimate` body: total shipment weight in ounces
///
/// Dimensions are sent only for single-package shipments.
pub fn serialize_rate_estimate(shipment: &Shipment, options: &RateEstimatesOptions) -> Value {
    let packages = shipment.packages();
    let package_dimensions = match packages.as_slice() {
        [only] => dimensions(&only.dimensions),
        _ => Value::Null,
    };

    compact(json!({
        "carrier_id": options.carrier_id,
        "from_country_code": shipment.origin.country,
        "from_postal_code": shipment.origin.zip,
        "from_city_locality": shipment.origin.city,
        "from_state_province": shipment.origin.region,
        "to_country_code": shipment.destination.country,
        "to_postal_code": shipment.destination.zip,
        "to_city_locality": shipment.destination.city,
        "to_state_province": shipment.destination.region,
        "weight": weight(shipment.weight()),
        "dimensions": package_dimensions,
        "confirmation": options.confirmation.as_str(),
        "address_residential_indicator": residential_indicator(&shipment.destination),
        "ship_date": options.ship_date.map(|d| d.format(DATE_FORMAT).to_string()),
    }))
}

fn package(package: &Package, options: &LabelOptions) -> Value {
    let package_options = options.options_for_package(package);
    json!({
        "package_code": package_options.package_code,
        "weight": weight(package.weight()),
        "dimensions": dimensions(&package.dimensions),
        "label_messages": {
            "reference1": package_options.reference1,
            "reference2": package_options.reference2,
            "reference3": package_options.reference3,
        },
    })
}

/// `labels` body with one package entry per shipment package
pub fn serialize_label(shipment: &Shipment, options: &LabelOptions) -> Value {
    let packages: Vec<Value> = shipment.packages().into_iter().map(|p| package(p, options)).collect();

    compact(json!({
        "shipment": {
            "carrier_id": options.carrier_id,
            "service_code": options.service_code,
            "ship_date": options.ship_date.map(|d| d.format(DATE_FORMAT).to_string()),
            "ship_to": address(&shipment.destination),
            "ship_from": address(&shipment.origin),
            "confirmation": options.confirmation.as_str(),
            "packages": packages,
        },
        "label_format": options.label_format,
        "label_layout": options.label_layout,
        "label_download_type": options.download_type.as_str(),
        "test_label": options.test_label,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carriers::ship_engine::ShipEnginePackageOptions;
    use crate::domain::{AddressType, Item};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn shipment() -> Shipment {
        Shipment {
            origin: Location {
                name: Some("Acme Shipping".to_string()),
                address1: Some("4009 Marathon Blvd".to_string()),
                city: Some("Austin".to_string()),
                region: Some("TX".to_string()),
                zip: Some("78756".to_string()),
                country: "US".to_string(),
                ..Default::default()
            },
            destination: Location {
                name: Some("Mickey".to_string()),
                address1: Some("500 S Buena Vista St".to_string()),
                city: Some("Burbank".to_string()),
                region: Some("CA".to_string()),
                zip: Some("91521".to_string()),
                country: "US".to_string(),
                address_type: AddressType::Residential,
                ..Default::default()
            },
            packages: vec![Package {
                id: "pkg-1".to_string(),
                dimensions: Dimensions::inches(5, 5, 5),
                items: vec![Item {
                    id: "item-1".to_string(),
                    weight: Weight::ounces(17),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_rate_estimate_payload() {
        let mut options = RateEstimatesOptions::new("se-123890");
        options.ship_date = NaiveDate::from_ymd_opt(2024, 3, 1);

        assert_eq!(
            serialize_rate_estimate(&shipment(), &options),
            json!({
                "carrier_id": "se-123890",
                "from_country_code": "US",
                "from_postal_code": "78756",
                "from_city_locality": "Austin",
                "from_state_province": "TX",
                "to_country_code": "US",
                "to_postal_code": "91521",
                "to_city_locality": "Burbank",
                "to_state_province": "CA",
                "weight": {"value": 17.0, "unit": "ounce"},
                "dimensions": {"unit": "inch", "length": 5.0, "width": 5.0, "height": 5.0},
                "confirmation": "none",
                "address_residential_indicator": "yes",
                "ship_date": "2024-03-01",
            })
        );
    }

    #[test]
    fn test_label_payload_package_options() {
        let mut options = LabelOptions::new("se-123890", "usps_priority_mail");
        options.package_options.push(ShipEnginePackageOptions {
            package_id: "pkg-1".to_string(),
            reference1: Some("Order 1001".to_string()),
            ..Default::default()
        });

        let payload = serialize_label(&shipment(), &options);

        assert_eq!(payload["shipment"]["ship_to"]["address_residential_indicator"], "yes");
        assert_eq!(payload["shipment"]["packages"][0]["label_messages"], json!({"reference1": "Order 1001"}));
        assert_eq!(payload["label_download_type"], "url");
        assert_eq!(payload["test_label"], false);
        assert!(payload["shipment"].get("ship_date").is_none());
    }

    #[test]
    fn test_serialization_is_repeatable() {
        let options = LabelOptions::new("se-123890", "usps_priority_mail");
        assert_eq!(serialize_label(&shipment(), &options), serialize_label(&shipment(), &options));

        let estimate = RateEstimatesOptions::new("se-123890");
        assert_eq!(
            serialize_rate_estimate(&shipment(), &estimate).to_string(),
            serialize_rate_estimate(&shipment(), &estimate).to_string()
        );
    }
}
