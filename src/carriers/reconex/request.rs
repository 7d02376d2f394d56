//! Reconex request payloads

use serde_json::{json, Value};

use super::options::LoadOptions;
use crate::carriers::payload::{ceil_whole, compact, decimal_number};
use crate::domain::{Location, Shipment};
use crate::options::PackageOptionsSource;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn stop(location: &Location) -> Value {
    json!({
        "name": location.company_name.as_ref().or(location.name.as_ref()),
        "contact": location.name,
        "address1": location.address1,
        "address2": location.address2,
        "city": location.city,
        "state": location.region,
        "zip": location.zip,
        "country": location.country,
        "phone": location.phone,
        "email": location.email,
        "residential": location.is_residential(),
    })
}

/// `CreateLoad` body; one item per package
pub fn serialize_load(shipment: &Shipment, options: &LoadOptions) -> Value {
    let items: Vec<Value> = shipment
        .packages()
        .into_iter()
        .map(|package| {
            let package_options = options.options_for_package(package);
            let dimensions = (!package.dimensions.is_zero()).then(|| {
                json!({
                    "length": decimal_number(package.dimensions.length.to_inches()),
                    "width": decimal_number(package.dimensions.width.to_inches()),
                    "height": decimal_number(package.dimensions.height.to_inches()),
                })
            });

            json!({
                "reference": package.id,
                "description": package.description,
                "pieces": 1,
                "weight": ceil_whole(package.weight().to_pounds()),
                "dimensions": dimensions,
                "freightClass": package_options.freight_class,
                "stackable": package_options.stackable,
                "hazmat": package_options.hazmat,
            })
        })
        .collect();

    compact(json!({
        "customerId": options.customer_id,
        "mode": options.mode,
        "equipmentType": options.equipment_type,
        "pickupDate": options.pickup_date.format(DATE_FORMAT).to_string(),
        "deliveryDate": options.delivery_date.map(|d| d.format(DATE_FORMAT).to_string()),
        "shipper": stop(&shipment.origin),
        "consignee": stop(&shipment.destination),
        "poNumber": options.po_number,
        "referenceNumbers": options.reference_numbers,
        "notes": options.notes,
        "items": items,
    }))
}

/// `GetLoadInfo` body
pub fn serialize_load_info(load_ids: &[String]) -> Value {
    json!({ "loadIds": load_ids })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carriers::reconex::ReconexPackageOptions;
    use crate::domain::{Dimensions, Item, Package, Weight};
    use chrono::NaiveDate;

    fn shipment() -> Shipment {
        Shipment {
            origin: Location {
                company_name: Some("Acme Fixtures".to_string()),
                address1: Some("100 Industrial Pkwy".to_string()),
                city: Some("Columbus".to_string()),
                region: Some("OH".to_string()),
                zip: Some("43215".to_string()),
                country: "US".to_string(),
                ..Default::default()
            },
            destination: Location {
                company_name: Some("Store 112".to_string()),
                city: Some("Denver".to_string()),
                region: Some("CO".to_string()),
                zip: Some("80202".to_string()),
                country: "US".to_string(),
                ..Default::default()
            },
            packages: vec![Package {
                id: "crate-1".to_string(),
                dimensions: Dimensions::inches(48, 40, 36),
                container_weight: Weight::pounds(25),
                items: vec![Item {
                    id: "shelf".to_string(),
                    weight: Weight::pounds(180),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_serialize_load() {
        let mut options = LoadOptions::new(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        options.po_number = Some("PO-4410".to_string());
        options.package_options.push(ReconexPackageOptions {
            package_id: "crate-1".to_string(),
            freight_class: Some("92.5".to_string()),
            stackable: true,
            ..Default::default()
        });

        let payload = serialize_load(&shipment(), &options);

        assert_eq!(payload["pickupDate"], "2024-06-10");
        assert!(payload.get("deliveryDate").is_none());
        assert_eq!(payload["shipper"]["name"], "Acme Fixtures");
        assert_eq!(payload["items"][0]["weight"], 205);
        assert_eq!(payload["items"][0]["freightClass"], "92.5");
        assert_eq!(payload["items"][0]["stackable"], true);
        assert_eq!(payload["items"][0]["dimensions"]["height"], 36.0);
        assert_eq!(payload["poNumber"], "PO-4410");
    }

    #[test]
    fn test_serialize_load_info() {
        let payload = serialize_load_info(&["L-1".to_string(), "L-2".to_string()]);
        assert_eq!(payload, json!({"loadIds": ["L-1", "L-2"]}));
    }

    #[test]
    fn test_serialization_is_repeatable() {
        let options = LoadOptions::new(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        let first = serialize_load(&shipment(), &options).to_string();
        let second = serialize_load(&shipment(), &options).to_string();
        assert_eq!(first, second);
    }
}
