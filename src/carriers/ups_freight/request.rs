//! UPS Freight rating request payload
//!
//! The UPS Freight JSON API encodes every number as a string.

use serde_json::{json, Value};

use super::options::RatesOptions;
use crate::carriers::payload::{ceil_whole, compact, group_by};
use crate::domain::{Location, Shipment, Weight};
use crate::options::PackageOptionsSource;

const DATE_FORMAT: &str = "%Y%m%d";
const DEFAULT_DESCRIPTION: &str = "Freight";

fn party(location: &Location, shipper_number: Option<&str>) -> Value {
    json!({
        "Name": location.company_name.as_ref().or(location.name.as_ref()),
        "ShipperNumber": shipper_number,
        "Address": {
            "AddressLine": location.address_lines(),
            "City": location.city,
            "StateProvinceCode": location.region,
            "PostalCode": location.zip,
            "CountryCode": location.country,
        },
        "Phone": location.phone.as_ref().map(|number| json!({"Number": number})),
    })
}

/// Packages grouped by class, NMFC and packaging type
fn commodities(shipment: &Shipment, options: &RatesOptions) -> Vec<Value> {
    let packages = shipment.packages();
    let groups = group_by(packages.iter().map(|package| {
        let package_options = options.options_for_package(package);
        let key = (
            package_options.freight_class.clone(),
            package_options.nmfc_prime.clone(),
            package_options.nmfc_sub.clone(),
            package_options.packaging_code().to_string(),
        );
        (key, *package)
    }));

    groups
        .into_iter()
        .map(|((freight_class, nmfc_prime, nmfc_sub, packaging_type), packages)| {
            let weight: Weight = packages.iter().map(|p| p.weight()).sum();
            let description = packages
                .iter()
                .find_map(|p| p.description.clone())
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

            json!({
                "Description": description,
                "Weight": {
                    "UnitOfMeasurement": {"Code": "LBS"},
                    "Value": ceil_whole(weight.to_pounds()).to_string(),
                },
                "NumberOfPieces": packages.len().to_string(),
                "PackagingType": {"Code": packaging_type},
                "FreightClass": freight_class,
                "NMFCCommodity": nmfc_prime.map(|prime| json!({"PrimeCode": prime, "SubCode": nmfc_sub})),
            })
        })
        .collect()
}

/// `FreightRateRequest` body
pub fn serialize_rates(shipment: &Shipment, options: &RatesOptions, shipper_number: Option<&str>) -> Value {
    compact(json!({
        "FreightRateRequest": {
            "Request": {"RequestOption": "1"},
            "ShipFrom": party(&shipment.origin, None),
            "ShipTo": party(&shipment.destination, None),
            "PaymentInformation": {
                "Payer": party(&shipment.origin, shipper_number),
                "ShipmentBillingOption": {"Code": options.billing_option},
            },
            "Service": {"Code": options.service_code},
            "HandlingUnitOne": {
                "Quantity": shipment.packages().len().to_string(),
                "Type": {"Code": options.handling_unit_type},
            },
            "Commodity": commodities(shipment, options),
            "PickupRequest": {"PickupDate": options.pickup_date.format(DATE_FORMAT).to_string()},
            "TimeInTransitIndicator": "Y",
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carriers::ups_freight::UpsFreightPackageOptions;
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
                city: Some("Dallas".to_string()),
                region: Some("TX".to_string()),
                zip: Some("75201".to_string()),
                country: "US".to_string(),
                ..Default::default()
            },
            destination: Location {
                city: Some("Memphis".to_string()),
                region: Some("TN".to_string()),
                zip: Some("38103".to_string()),
                country: "US".to_string(),
                ..Default::default()
            },
            packages: vec![package("a", 150), package("b", 210), package("c", 90)],
            ..Default::default()
        }
    }

    fn classed(id: &str, class: &str) -> UpsFreightPackageOptions {
        UpsFreightPackageOptions {
            package_id: id.to_string(),
            freight_class: Some(class.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_commodities_grouped_by_class() {
        let mut options = RatesOptions::new(NaiveDate::from_ymd_opt(2024, 5, 6).unwrap());
        options.package_options = vec![classed("a", "85"), classed("b", "100"), classed("c", "85")];

        let payload = serialize_rates(&shipment(), &options, Some("A1B2C3"));
        let request = &payload["FreightRateRequest"];

        assert_eq!(
            request["Commodity"][0],
            json!({
                "Description": "Freight",
                "Weight": {"UnitOfMeasurement": {"Code": "LBS"}, "Value": "240"},
                "NumberOfPieces": "2",
                "PackagingType": {"Code": "PLT"},
                "FreightClass": "85",
            })
        );
        assert_eq!(request["Commodity"].as_array().unwrap().len(), 2);
        assert_eq!(request["HandlingUnitOne"]["Quantity"], "3");
        assert_eq!(request["PickupRequest"]["PickupDate"], "20240506");
        assert_eq!(request["PaymentInformation"]["Payer"]["ShipperNumber"], "A1B2C3");
        assert!(request["ShipFrom"].get("ShipperNumber").is_none());
    }

    #[test]
    fn test_serialization_is_repeatable() {
        let options = RatesOptions::new(NaiveDate::from_ymd_opt(2024, 5, 6).unwrap());
        assert_eq!(
            serialize_rates(&shipment(), &options, None),
            serialize_rates(&shipment(), &options, None)
        );
    }
}
