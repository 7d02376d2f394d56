//! R+L request payloads

use serde_json::{json, Value};
use url::Url;

use super::options::{BolOptions, RateQuoteOptions, RlPackageOptions, RlShipmentOverrides, TransitTimesOptions};
use crate::carriers::payload::{ceil_whole, compact, decimal_number, group_by};
use crate::carriers::traits::ApiError;
use crate::domain::{Item, Location, Package, Shipment, Weight};
use crate::options::{ItemOptionsSource, PackageOptionsSource, StructureOptionsSource};

const DATE_FORMAT: &str = "%m/%d/%Y";
const TIME_FORMAT: &str = "%I:%M %p";

/// An item with the options that apply to it
struct ResolvedItem<'a> {
    item: &'a Item,
    packaging_type: Option<String>,
    freight_class: Option<String>,
    nmfc_primary_code: Option<String>,
    nmfc_sub_code: Option<String>,
    hazmat: bool,
}

fn push_items<'a>(resolved: &mut Vec<ResolvedItem<'a>>, package: &'a Package, options: &RlPackageOptions) {
    for item in &package.items {
        let item_options = options.options_for_item(item);
        resolved.push(ResolvedItem {
            item,
            packaging_type: options.packaging_type.clone(),
            freight_class: item_options.freight_class.clone(),
            nmfc_primary_code: item_options.nmfc_primary_code.clone(),
            nmfc_sub_code: item_options.nmfc_sub_code.clone(),
            hazmat: item_options.hazmat,
        });
    }
}

fn resolved_items<'a>(shipment: &'a Shipment, overrides: &RlShipmentOverrides) -> Vec<ResolvedItem<'a>> {
    let mut resolved = Vec::new();

    if shipment.packages.is_empty() {
        for structure in &shipment.structures {
            let structure_options = overrides.options_for_structure(structure);
            for package in &structure.packages {
                push_items(&mut resolved, package, &structure_options.options_for_package(package));
            }
        }
    } else {
        for package in &shipment.packages {
            push_items(&mut resolved, package, &overrides.options_for_package(package));
        }
    }

    resolved
}

/// R+L uses three-letter country codes
fn country_code(country: &str) -> String {
    match country {
        "US" => "USA".to_string(),
        "CA" => "CAN".to_string(),
        "MX" => "MEX".to_string(),
        other => other.to_string(),
    }
}

fn point(location: &Location) -> Value {
    json!({
        "City": location.city,
        "StateOrProvince": location.region,
        "ZipOrPostalCode": location.zip,
        "CountryCode": country_code(&location.country),
    })
}

fn party(location: &Location) -> Value {
    json!({
        "CompanyName": location.company_name.as_ref().or(location.name.as_ref()),
        "AddressLine1": location.address1,
        "AddressLine2": location.address2,
        "City": location.city,
        "StateOrProvince": location.region,
        "ZipOrPostalCode": location.zip,
        "CountryCode": country_code(&location.country),
        "PhoneNumber": location.phone,
        "EmailAddress": location.email,
    })
}

fn total_pounds(weights: impl IntoIterator<Item = Weight>) -> i64 {
    ceil_whole(weights.into_iter().sum::<Weight>().to_pounds())
}

/// `RateQuote` body: one line per freight class with summed weight
pub fn serialize_rate_quote(shipment: &Shipment, options: &RateQuoteOptions) -> Value {
    let items: Vec<Value> = group_by(
        resolved_items(shipment, &options.overrides)
            .into_iter()
            .map(|r| (r.freight_class, r.item.weight)),
    )
    .into_iter()
    .map(|(freight_class, weights)| {
        json!({
            "Class": freight_class,
            "Weight": total_pounds(weights),
        })
    })
    .collect();

    compact(json!({
        "RateQuote": {
            "PickupDate": options.pickup_date.format(DATE_FORMAT).to_string(),
            "Origin": point(&shipment.origin),
            "Destination": point(&shipment.destination),
            "Items": items,
            "DeclaredValue": options.declared_value.as_ref().map(|m| decimal_number(m.amount)),
            "AdditionalServices": options.additional_service_codes(),
        }
    }))
}

/// `TransitTimes` URL with the lanes and pickup date as query parameters
pub fn transit_times_url(
    base_url: &str,
    shipment: &Shipment,
    options: &TransitTimesOptions,
) -> Result<String, ApiError> {
    let origin = &shipment.origin;
    let destination = &shipment.destination;
    let optional = |value: &Option<String>| value.clone().unwrap_or_default();

    let params = [
        ("OriginCity", optional(&origin.city)),
        ("OriginStateOrProvince", optional(&origin.region)),
        ("OriginZipOrPostalCode", optional(&origin.zip)),
        ("OriginCountryCode", country_code(&origin.country)),
        ("DestinationCity", optional(&destination.city)),
        ("DestinationStateOrProvince", optional(&destination.region)),
        ("DestinationZipOrPostalCode", optional(&destination.zip)),
        ("DestinationCountryCode", country_code(&destination.country)),
        ("PickupDate", options.pickup_date.format(DATE_FORMAT).to_string()),
    ];

    Url::parse_with_params(&format!("{}/TransitTimes", base_url), &params)
        .map(String::from)
        .map_err(|e| ApiError::InvalidOption(format!("transit times URL: {}", e)))
}

/// `BillOfLading` body with pickup request
///
/// Items sharing class, NMFC codes, hazmat flag and packaging type become one
/// BOL line with their piece count and summed weight.
pub fn serialize_bol(shipment: &Shipment, options: &BolOptions) -> Value {
    let groups = group_by(resolved_items(shipment, &options.overrides).into_iter().map(|r| {
        let key = (
            r.freight_class.clone(),
            r.nmfc_primary_code.clone(),
            r.nmfc_sub_code.clone(),
            r.hazmat,
            r.packaging_type.clone(),
        );
        (key, r.item)
    }));

    let items: Vec<Value> = groups
        .into_iter()
        .map(|((freight_class, nmfc_primary, nmfc_sub, hazmat, packaging_type), items)| {
            json!({
                "IsHazmat": hazmat,
                "Pieces": items.len(),
                "PackageType": packaging_type,
                "NMFCItemNumber": nmfc_primary,
                "NMFCSubNumber": nmfc_sub,
                "Class": freight_class,
                "Weight": total_pounds(items.iter().map(|i| i.weight)),
                "Description": items.iter().find_map(|i| i.description.clone()),
            })
        })
        .collect();

    let bol_date = options.bol_date.unwrap_or(options.pickup_date);

    compact(json!({
        "BillOfLading": {
            "BOLDate": bol_date.format(DATE_FORMAT).to_string(),
            "Shipper": party(&shipment.origin),
            "Consignee": party(&shipment.destination),
            "Items": items,
            "ServiceLevel": options.service_level,
            "SpecialInstructions": options.special_instructions,
            "ReferenceNumbers": {
                "ShipperNumber": options.reference_numbers.shipper_number,
                "PONumber": options.reference_numbers.po_number,
            },
            "DeclaredValue": options.declared_value.as_ref().map(|m| decimal_number(m.amount)),
            "AdditionalServices": options.additional_service_codes(),
        },
        "PickupRequest": {
            "PickupInformation": {
                "PickupDate": options.pickup_date.format(DATE_FORMAT).to_string(),
                "ReadyTime": options.pickup_ready_time.format(TIME_FORMAT).to_string(),
                "CloseTime": options.pickup_close_time.format(TIME_FORMAT).to_string(),
            }
        },
        "GenerateUniversalPro": options.generate_universal_pro,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carriers::rl::{RlItemOptions, RlStructureOptions};
    use crate::domain::Structure;
    use chrono::NaiveDate;

    fn shipment() -> Shipment {
        let item = |id: &str, pounds: i64| Item {
            id: id.to_string(),
            weight: Weight::pounds(pounds),
            description: Some(format!("Widget {}", id)),
            ..Default::default()
        };

        Shipment {
            origin: Location {
                city: Some("Wilmington".to_string()),
                region: Some("OH".to_string()),
                zip: Some("45177".to_string()),
                country: "US".to_string(),
                ..Default::default()
            },
            destination: Location {
                city: Some("Durham".to_string()),
                region: Some("NC".to_string()),
                zip: Some("27703".to_string()),
                country: "US".to_string(),
                ..Default::default()
            },
            structures: vec![Structure {
                id: "pallet-1".to_string(),
                packages: vec![Package {
                    id: "pkg-1".to_string(),
                    items: vec![item("a", 100), item("b", 50), item("c", 25)],
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn overrides() -> RlShipmentOverrides {
        let class = |id: &str, class: &str| RlItemOptions {
            item_id: id.to_string(),
            freight_class: Some(class.to_string()),
            ..Default::default()
        };

        RlShipmentOverrides {
            structure_options: vec![RlStructureOptions {
                structure_id: "pallet-1".to_string(),
                package_options: vec![RlPackageOptions {
                    package_id: "pkg-1".to_string(),
                    packaging_type: Some("PLT".to_string()),
                    item_options: vec![class("a", "92.5"), class("b", "92.5"), class("c", "70")],
                }],
            }],
            package_options: vec![],
        }
    }

    #[test]
    fn test_rate_quote_groups_by_freight_class() {
        let options = RateQuoteOptions::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()).with_overrides(overrides());
        let payload = serialize_rate_quote(&shipment(), &options);

        assert_eq!(
            payload["RateQuote"]["Items"],
            json!([{"Class": "92.5", "Weight": 150}, {"Class": "70", "Weight": 25}])
        );
        assert_eq!(payload["RateQuote"]["PickupDate"], "03/01/2024");
        assert_eq!(payload["RateQuote"]["Origin"]["CountryCode"], "USA");
        assert!(payload["RateQuote"].get("DeclaredValue").is_none());
    }

    #[test]
    fn test_items_without_options_share_a_classless_line() {
        let options = RateQuoteOptions::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        let payload = serialize_rate_quote(&shipment(), &options);

        assert_eq!(payload["RateQuote"]["Items"], json!([{"Weight": 175}]));
    }

    #[test]
    fn test_serialization_is_repeatable() {
        let options = BolOptions::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()).with_overrides(overrides());
        let first = serialize_bol(&shipment(), &options).to_string();
        let second = serialize_bol(&shipment(), &options).to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bol_counts_pieces_per_group() {
        let options = BolOptions::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()).with_overrides(overrides());
        let payload = serialize_bol(&shipment(), &options);
        let items = payload["BillOfLading"]["Items"].as_array().unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["Pieces"], 2);
        assert_eq!(items[0]["Weight"], 150);
        assert_eq!(items[0]["PackageType"], "PLT");
        assert_eq!(items[0]["Description"], "Widget a");
        assert_eq!(payload["PickupRequest"]["PickupInformation"]["ReadyTime"], "09:00 AM");
        assert_eq!(payload["BillOfLading"]["BOLDate"], "03/01/2024");
    }

    #[test]
    fn test_transit_times_url() {
        let options = TransitTimesOptions {
            pickup_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        let url = transit_times_url("https://api.rlc.com", &shipment(), &options).unwrap();

        assert!(url.starts_with("https://api.rlc.com/TransitTimes?OriginCity=Wilmington"));
        assert!(url.contains("DestinationZipOrPostalCode=27703"));
        assert!(url.contains("PickupDate=03%2F01%2F2024"));
    }
}
