//! USPS RateV4 request document

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use url::Url;

use super::mail_service::BoxName;
use super::options::RateEstimateOptions;
use crate::carriers::payload::{fixed, to_xml, XML_DECLARATION};
use crate::carriers::traits::ApiError;
use crate::domain::{Package, Shipment, Weight};
use crate::options::PackageOptionsSource;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct RateV4Request {
    #[serde(rename = "@USERID")]
    user_id: String,
    revision: u8,
    package: Vec<PackageElement>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct PackageElement {
    #[serde(rename = "@ID")]
    id: String,
    service: &'static str,
    zip_origination: String,
    zip_destination: String,
    pounds: i64,
    ounces: String,
    container: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<String>,
    machinable: bool,
}

/// Id sent in `<Package ID>`; the 1-based position when a package has none
fn package_id(index: usize, package: &Package) -> String {
    if package.id.is_empty() {
        (index + 1).to_string()
    } else {
        package.id.clone()
    }
}

/// Requested box per package id
pub fn requested_boxes(shipment: &Shipment, options: &RateEstimateOptions) -> Vec<(String, BoxName)> {
    shipment
        .packages()
        .into_iter()
        .enumerate()
        .map(|(index, package)| (package_id(index, package), options.options_for_package(package).box_name))
        .collect()
}

/// Whole pounds plus remaining ounces, ounces rounded up to a tenth
pub fn pounds_and_ounces(weight: Weight) -> (i64, Decimal) {
    let tenths = (weight.to_ounces() * Decimal::TEN).ceil().to_i64().unwrap_or_default();
    (tenths / 160, Decimal::new(tenths % 160, 1))
}

fn package_element(
    index: usize,
    package: &Package,
    shipment: &Shipment,
    options: &RateEstimateOptions,
) -> PackageElement {
    let package_options = options.options_for_package(package);
    let (pounds, ounces) = pounds_and_ounces(package.weight());

    let dimensions = &package.dimensions;
    let send_dimensions = package_options.box_name.is_variable() && !dimensions.is_zero();
    let inches = |length: crate::domain::Length| send_dimensions.then(|| fixed(length.to_inches(), 1));

    PackageElement {
        id: package_id(index, package),
        service: "ALL",
        zip_origination: shipment.origin.zip5().unwrap_or_default(),
        zip_destination: shipment.destination.zip5().unwrap_or_default(),
        pounds,
        ounces: fixed(ounces, 1),
        container: package_options.box_name.container(),
        width: inches(dimensions.width),
        length: inches(dimensions.length),
        height: inches(dimensions.height),
        machinable: package_options.machinable,
    }
}

/// `RateV4Request` document, without the XML declaration USPS rejects in query strings
pub fn serialize_rate_request(
    shipment: &Shipment,
    options: &RateEstimateOptions,
    user_id: &str,
) -> Result<String, ApiError> {
    let document = RateV4Request {
        user_id: user_id.to_string(),
        revision: 2,
        package: shipment
            .packages()
            .into_iter()
            .enumerate()
            .map(|(index, package)| package_element(index, package, shipment, options))
            .collect(),
    };

    let xml = to_xml("RateV4Request", &document)?;
    Ok(xml.trim_start_matches(XML_DECLARATION).to_string())
}

pub fn rate_url(base_url: &str, xml: &str) -> Result<String, ApiError> {
    Url::parse_with_params(&format!("{}/ShippingAPI.dll", base_url), &[("API", "RateV4"), ("XML", xml)])
        .map(String::from)
        .map_err(|e| ApiError::InvalidOption(format!("RateV4 URL: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carriers::usps::UspsPackageOptions;
    use crate::domain::{Dimensions, Item, Location};

    fn shipment() -> Shipment {
        let package = |id: &str, ounces: i64, dimensions: Dimensions| Package {
            id: id.to_string(),
            dimensions,
            items: vec![Item {
                id: format!("{}-item", id),
                weight: Weight::ounces(ounces),
                ..Default::default()
            }],
            ..Default::default()
        };

        Shipment {
            origin: Location {
                zip: Some("27703".to_string()),
                country: "US".to_string(),
                ..Default::default()
            },
            destination: Location {
                zip: Some("90210-1234".to_string()),
                country: "US".to_string(),
                ..Default::default()
            },
            packages: vec![
                package("p1", 20, Dimensions::inches(14, 10, 4)),
                package("p2", 8, Dimensions::default()),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_pounds_and_ounces_split() {
        assert_eq!(pounds_and_ounces(Weight::ounces(20)), (1, Decimal::new(40, 1)));
        assert_eq!(pounds_and_ounces(Weight::pounds(2)), (2, Decimal::ZERO));
        assert_eq!(pounds_and_ounces(Weight::ounces(Decimal::new(1596, 2))), (1, Decimal::ZERO));
    }

    #[test]
    fn test_rate_request_document() {
        let mut options = RateEstimateOptions::default();
        options.package_options.push(UspsPackageOptions {
            package_id: "p2".to_string(),
            box_name: BoxName::SmallFlatRateBox,
            ..Default::default()
        });

        let xml = serialize_rate_request(&shipment(), &options, "USER1").unwrap();

        assert!(xml.starts_with("<RateV4Request USERID=\"USER1\"><Revision>2</Revision>"));
        assert!(xml.contains(
            "<Package ID=\"p1\"><Service>ALL</Service><ZipOrigination>27703</ZipOrigination>\
             <ZipDestination>90210</ZipDestination><Pounds>1</Pounds><Ounces>4.0</Ounces>\
             <Container>VARIABLE</Container><Width>10.0</Width><Length>14.0</Length><Height>4.0</Height>\
             <Machinable>true</Machinable></Package>"
        ));
        assert!(xml.contains("<Container>SM FLAT RATE BOX</Container><Machinable>true</Machinable>"));
    }

    #[test]
    fn test_requested_boxes_default_to_variable() {
        let boxes = requested_boxes(&shipment(), &RateEstimateOptions::default());
        assert_eq!(
            boxes,
            vec![("p1".to_string(), BoxName::Variable), ("p2".to_string(), BoxName::Variable)]
        );
    }

    #[test]
    fn test_rate_url_encodes_document() {
        let url = rate_url("https://secure.shippingapis.com", "<RateV4Request USERID=\"U\"/>").unwrap();
        assert!(url.starts_with("https://secure.shippingapis.com/ShippingAPI.dll?API=RateV4&XML=%3CRateV4Request"));
    }
}
