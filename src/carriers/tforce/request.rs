//! TForce Freight request payloads

use serde_json::{json, Value};
use std::borrow::Cow;

use super::options::{BolOptions, CommodityOverrides, RatesOptions, TForceCommodityOptions};
use crate::carriers::payload::{ceil_whole, compact, decimal_number, group_by};
use crate::domain::{Dimensions, Location, Shipment, Weight};
use crate::options::{PackageOptionsSource, StructureOptionsSource};

const RATE_DATE_FORMAT: &str = "%Y-%m-%d";
const BOL_DATE_FORMAT: &str = "%Y%m%d";

/// One handling unit (structure, or loose package) with its options
struct HandlingUnit<'a> {
    options: Cow<'a, TForceCommodityOptions>,
    weight: Weight,
    dimensions: Dimensions,
    description: Option<String>,
}

fn handling_units<'a>(shipment: &'a Shipment, overrides: &'a CommodityOverrides) -> Vec<HandlingUnit<'a>> {
    if shipment.structures.is_empty() {
        shipment
            .packages
            .iter()
            .map(|package| HandlingUnit {
                options: overrides.options_for_package(package),
                weight: package.weight(),
                dimensions: package.dimensions,
                description: package.description.clone(),
            })
            .collect()
    } else {
        shipment
            .structures
            .iter()
            .map(|structure| HandlingUnit {
                options: overrides.options_for_structure(structure),
                weight: structure.weight(),
                dimensions: structure.dimensions,
                description: structure.description.clone(),
            })
            .collect()
    }
}

/// Handling units grouped by class, NMFC, packaging and hazmat flag
fn commodities(shipment: &Shipment, overrides: &CommodityOverrides) -> Vec<Value> {
    let groups = group_by(handling_units(shipment, overrides).into_iter().map(|unit| {
        let key = (
            unit.options.freight_class.clone(),
            unit.options.nmfc_prime.clone(),
            unit.options.nmfc_sub.clone(),
            unit.options.packaging_code().to_string(),
            unit.options.hazmat,
        );
        (key, unit)
    }));

    groups
        .into_iter()
        .map(|((freight_class, nmfc_prime, nmfc_sub, packaging_type, hazmat), units)| {
            let dimensions = match units.as_slice() {
                [only] if !only.dimensions.is_zero() => json!({
                    "length": decimal_number(only.dimensions.length.to_inches()),
                    "width": decimal_number(only.dimensions.width.to_inches()),
                    "height": decimal_number(only.dimensions.height.to_inches()),
                    "unit": "IN",
                }),
                _ => Value::Null,
            };

            json!({
                "class": freight_class,
                "nmfc": nmfc_prime.map(|prime| json!({"prime": prime, "sub": nmfc_sub})),
                "pieces": units.len(),
                "weight": {
                    "weight": ceil_whole(units.iter().map(|u| u.weight).sum::<Weight>().to_pounds()),
                    "weightUnit": "LBS",
                },
                "packagingType": packaging_type,
                "dimensions": dimensions,
                "hazardousMaterial": hazmat,
                "description": units.iter().find_map(|u| u.description.clone()),
            })
        })
        .collect()
}

fn lane_address(location: &Location) -> Value {
    json!({
        "city": location.city,
        "stateProvinceCode": location.region,
        "postalCode": location.zip,
        "country": location.country,
    })
}

fn party(location: &Location) -> Value {
    json!({
        "name": location.company_name.as_ref().or(location.name.as_ref()),
        "address": {
            "addressLine": location.address_lines(),
            "city": location.city,
            "stateProvinceCode": location.region,
            "postalCode": location.zip,
            "country": location.country,
        },
        "phone": {"number": location.phone},
        "email": location.email,
    })
}

/// `getRate` body
pub fn serialize_rates(shipment: &Shipment, options: &RatesOptions) -> Value {
    compact(json!({
        "requestOptions": {
            "serviceCode": options.service_code,
            "pickupDate": options.pickup_date.format(RATE_DATE_FORMAT).to_string(),
            "type": "L",
            "densityEligible": false,
            "timeInTransit": true,
            "quoteNumber": true,
        },
        "shipFrom": {"address": lane_address(&shipment.origin)},
        "shipTo": {"address": lane_address(&shipment.destination)},
        "payment": {
            "payer": {"address": lane_address(&shipment.origin)},
            "billingCode": options.billing_code,
        },
        "serviceOptions": {
            "pickup": options.pickup_services,
            "delivery": options.delivery_services,
        },
        "commodities": commodities(shipment, &options.commodities),
    }))
}

/// `createBOL` body
pub fn serialize_bol(shipment: &Shipment, options: &BolOptions) -> Value {
    let references: Vec<Value> = options
        .references
        .iter()
        .map(|r| json!({"number": r.number, "type": r.reference_type}))
        .collect();

    let documents = options.request_documents.then(|| {
        json!({
            "image": [
                {"type": "20", "format": "01"},
                {"type": "30", "format": "01", "labelType": "01", "startPosition": 1, "numberOfStickers": 1},
            ]
        })
    });

    compact(json!({
        "requestOptions": {
            "serviceCode": options.service_code,
            "pickupDate": options.pickup_date.format(BOL_DATE_FORMAT).to_string(),
            "previewRate": false,
            "timeInTransit": false,
        },
        "shipFrom": party(&shipment.origin),
        "shipTo": party(&shipment.destination),
        "payment": {
            "payer": party(&shipment.origin),
            "billingCode": options.billing_code,
        },
        "commodities": commodities(shipment, &options.commodities),
        "reference": references,
        "handlingInstructions": options.handling_instructions,
        "documents": documents,
    }))
}
