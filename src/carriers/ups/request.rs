//! UPS XML request documents

use rust_decimal::Decimal;
use serde::Serialize;

use super::options::{LabelOptions, RateEstimateOptions, TimingsOptions, UpsPackageOptions};
use crate::carriers::payload::{fixed, to_xml};
use crate::carriers::traits::ApiError;
use crate::domain::{Location, Package, Shipment};
use crate::options::PackageOptionsSource;

const PICKUP_DATE_FORMAT: &str = "%Y%m%d";

// ============================================================================
// Document types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct AccessRequest<'a> {
    #[serde(rename = "@xml:lang")]
    lang: &'a str,
    access_license_number: &'a str,
    user_id: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct RequestHeader {
    request_action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_option: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Code {
    code: String,
}

impl Code {
    fn new(code: impl Into<String>) -> Self {
        Code { code: code.into() }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address_line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address_line3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state_province_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    postal_code: Option<String>,
    country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    residential_address_indicator: Option<()>,
}

impl From<&Location> for Address {
    fn from(location: &Location) -> Self {
        let mut lines = location.address_lines().into_iter();
        Address {
            address_line1: lines.next(),
            address_line2: lines.next(),
            address_line3: lines.next(),
            city: location.city.clone(),
            state_province_code: location.region.clone(),
            postal_code: location.zip.clone(),
            country_code: location.country.clone(),
            residential_address_indicator: location.is_residential().then_some(()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Party {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attention_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shipper_number: Option<String>,
    address: Address,
}

impl Party {
    fn shipper(location: &Location, shipper_number: Option<&str>) -> Self {
        Party {
            name: location.company_name.clone().or_else(|| location.name.clone()),
            company_name: None,
            attention_name: location.name.clone(),
            phone_number: location.phone.clone(),
            shipper_number: shipper_number.map(str::to_string),
            address: Address::from(location),
        }
    }

    fn company(location: &Location) -> Self {
        Party {
            name: None,
            company_name: location.company_name.clone().or_else(|| location.name.clone()),
            attention_name: location.name.clone(),
            phone_number: location.phone.clone(),
            shipper_number: None,
            address: Address::from(location),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Dimensions {
    unit_of_measurement: Code,
    length: String,
    width: String,
    height: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct WeightElement {
    unit_of_measurement: Code,
    weight: String,
}

impl WeightElement {
    fn pounds(pounds: Decimal) -> Self {
        WeightElement {
            unit_of_measurement: Code::new("LBS"),
            weight: fixed(pounds.max(Decimal::new(1, 1)), 1),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ReferenceNumberElement {
    code: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct DeliveryConfirmationElement {
    #[serde(rename = "DCISType")]
    dcis_type: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct PackageServiceOptions {
    delivery_confirmation: DeliveryConfirmationElement,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct PackageElement {
    packaging_type: Code,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dimensions: Option<Dimensions>,
    package_weight: WeightElement,
    reference_number: Vec<ReferenceNumberElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    package_service_options: Option<PackageServiceOptions>,
}

impl PackageElement {
    fn new(package: &Package, options: &UpsPackageOptions) -> Self {
        let dimensions = (!package.dimensions.is_zero()).then(|| Dimensions {
            unit_of_measurement: Code::new("IN"),
            length: fixed(package.dimensions.length.to_inches(), 2),
            width: fixed(package.dimensions.width.to_inches(), 2),
            height: fixed(package.dimensions.height.to_inches(), 2),
        });

        PackageElement {
            packaging_type: Code::new(options.packaging_code()),
            description: package.description.clone(),
            dimensions,
            package_weight: WeightElement::pounds(package.weight().to_pounds()),
            reference_number: options
                .reference_numbers
                .iter()
                .map(|r| ReferenceNumberElement {
                    code: r.code.clone(),
                    value: r.value.clone(),
                })
                .collect(),
            package_service_options: options.delivery_confirmation.map(|dc| PackageServiceOptions {
                delivery_confirmation: DeliveryConfirmationElement { dcis_type: dc.code() },
            }),
        }
    }
}

fn packages(
    shipment: &Shipment,
    source: &impl PackageOptionsSource<Package = UpsPackageOptions>,
) -> Vec<PackageElement> {
    shipment
        .packages()
        .into_iter()
        .map(|package| PackageElement::new(package, &source.options_for_package(package)))
        .collect()
}

// ============================================================================
// Rate
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct RateInformation {
    negotiated_rates_indicator: (),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct RateShipment {
    shipper: Party,
    ship_to: Party,
    ship_from: Party,
    package: Vec<PackageElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rate_information: Option<RateInformation>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct RatingServiceSelectionRequest {
    request: RequestHeader,
    pickup_type: Code,
    #[serde(skip_serializing_if = "Option::is_none")]
    customer_classification: Option<Code>,
    shipment: RateShipment,
}

// ============================================================================
// Time in transit
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct AddressArtifactFormat {
    #[serde(skip_serializing_if = "Option::is_none")]
    political_division2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    political_division1: Option<String>,
    country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    postcode_primary_low: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    residential_address_indicator: Option<()>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct TransitAddress {
    address_artifact_format: AddressArtifactFormat,
}

impl From<&Location> for TransitAddress {
    fn from(location: &Location) -> Self {
        TransitAddress {
            address_artifact_format: AddressArtifactFormat {
                political_division2: location.city.clone(),
                political_division1: location.region.clone(),
                country_code: location.country.clone(),
                postcode_primary_low: location.zip5(),
                residential_address_indicator: location.is_residential().then_some(()),
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct InvoiceLineTotal {
    currency_code: String,
    monetary_value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct TimeInTransitRequest {
    request: RequestHeader,
    transit_from: TransitAddress,
    transit_to: TransitAddress,
    pickup_date: String,
    shipment_weight: WeightElement,
    total_packages_in_shipment: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    invoice_line_total: Option<InvoiceLineTotal>,
}

// ============================================================================
// Ship confirm / accept
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct BillShipper {
    account_number: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Prepaid {
    bill_shipper: BillShipper,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct PaymentInformation {
    prepaid: Prepaid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ConfirmShipment {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    shipper: Party,
    ship_to: Party,
    ship_from: Party,
    payment_information: PaymentInformation,
    service: Code,
    package: Vec<PackageElement>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct LabelSpecification {
    label_print_method: Code,
    #[serde(skip_serializing_if = "Option::is_none")]
    label_image_format: Option<Code>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label_stock_size: Option<LabelStockSize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct LabelStockSize {
    height: u32,
    width: u32,
}

impl LabelSpecification {
    /// Image labels carry an image format; thermal labels carry a stock size
    fn new(options: &LabelOptions) -> Self {
        let method = options.label_format.trim().to_uppercase();
        if method == "GIF" {
            LabelSpecification {
                label_print_method: Code::new("GIF"),
                label_image_format: Some(Code::new("GIF")),
                label_stock_size: None,
            }
        } else {
            LabelSpecification {
                label_print_method: Code::new(method),
                label_image_format: None,
                label_stock_size: Some(LabelStockSize {
                    height: options.label_size.height,
                    width: options.label_size.width,
                }),
            }
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ShipmentConfirmRequest {
    request: RequestHeader,
    shipment: ConfirmShipment,
    label_specification: LabelSpecification,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ShipmentAcceptRequest<'a> {
    request: RequestHeader,
    shipment_digest: &'a str,
}

// ============================================================================
// Builders
// ============================================================================

/// `AccessRequest` document sent ahead of every request document
pub fn access_request(license_number: &str, user_id: &str, password: &str) -> Result<String, ApiError> {
    to_xml(
        "AccessRequest",
        &AccessRequest {
            lang: "en-US",
            access_license_number: license_number,
            user_id,
            password,
        },
    )
}

/// `RatingServiceSelectionRequest` shopping every service for the shipment
pub fn serialize_rate_request(
    shipment: &Shipment,
    options: &RateEstimateOptions,
    shipper_number: Option<&str>,
) -> Result<String, ApiError> {
    let document = RatingServiceSelectionRequest {
        request: RequestHeader {
            request_action: "Rate",
            request_option: Some("Shop"),
        },
        pickup_type: Code::new(options.pickup_type.clone()),
        customer_classification: options.customer_classification.clone().map(Code::new),
        shipment: RateShipment {
            shipper: Party::shipper(&shipment.origin, shipper_number),
            ship_to: Party::company(&shipment.destination),
            ship_from: Party::company(&shipment.origin),
            package: packages(shipment, options),
            rate_information: (options.negotiated_rates && shipper_number.is_some()).then_some(RateInformation {
                negotiated_rates_indicator: (),
            }),
        },
    };

    to_xml("RatingServiceSelectionRequest", &document)
}

pub fn serialize_time_in_transit(shipment: &Shipment, options: &TimingsOptions) -> Result<String, ApiError> {
    let document = TimeInTransitRequest {
        request: RequestHeader {
            request_action: "TimeInTransit",
            request_option: None,
        },
        transit_from: TransitAddress::from(&shipment.origin),
        transit_to: TransitAddress::from(&shipment.destination),
        pickup_date: options.pickup_date.format(PICKUP_DATE_FORMAT).to_string(),
        shipment_weight: WeightElement::pounds(shipment.weight().to_pounds()),
        total_packages_in_shipment: shipment.packages().len().max(1),
        invoice_line_total: options.invoice_total.as_ref().map(|m| InvoiceLineTotal {
            currency_code: m.currency.clone(),
            monetary_value: fixed(m.amount, 2),
        }),
    };

    to_xml("TimeInTransitRequest", &document)
}

/// `ShipmentConfirmRequest` billed to the shipper account
pub fn serialize_ship_confirm(
    shipment: &Shipment,
    options: &LabelOptions,
    shipper_number: &str,
) -> Result<String, ApiError> {
    let document = ShipmentConfirmRequest {
        request: RequestHeader {
            request_action: "ShipConfirm",
            request_option: Some("validate"),
        },
        shipment: ConfirmShipment {
            description: options.description.clone(),
            shipper: Party::shipper(&shipment.origin, Some(shipper_number)),
            ship_to: Party::company(&shipment.destination),
            ship_from: Party::company(&shipment.origin),
            payment_information: PaymentInformation {
                prepaid: Prepaid {
                    bill_shipper: BillShipper {
                        account_number: shipper_number.to_string(),
                    },
                },
            },
            service: Code::new(options.service_code.clone()),
            package: packages(shipment, options),
        },
        label_specification: LabelSpecification::new(options),
    };

    to_xml("ShipmentConfirmRequest", &document)
}

pub fn serialize_ship_accept(shipment_digest: &str) -> Result<String, ApiError> {
    to_xml(
        "ShipmentAcceptRequest",
        &ShipmentAcceptRequest {
            request: RequestHeader {
                request_action: "ShipAccept",
                request_option: Some("01"),
            },
            shipment_digest,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carriers::ups::{DeliveryConfirmation, LabelSize, ReferenceNumber};
    use crate::domain::{AddressType, Dimensions as PackageDimensions, Item, Weight};
    use chrono::NaiveDate;

    fn shipment() -> Shipment {
        Shipment {
            origin: Location {
                company_name: Some("Acme Widgets".to_string()),
                address1: Some("100 Main St".to_string()),
                city: Some("Durham".to_string()),
                region: Some("NC".to_string()),
                zip: Some("27703".to_string()),
                country: "US".to_string(),
                ..Default::default()
            },
            destination: Location {
                name: Some("Jane Doe".to_string()),
                address1: Some("1 Elm St".to_string()),
                city: Some("Beverly Hills".to_string()),
                region: Some("CA".to_string()),
                zip: Some("90210-1234".to_string()),
                country: "US".to_string(),
                address_type: AddressType::Residential,
                ..Default::default()
            },
            packages: vec![Package {
                id: "box-1".to_string(),
                dimensions: PackageDimensions::inches(12, 8, 6),
                items: vec![Item {
                    id: "item-1".to_string(),
                    weight: Weight::ounces(40),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_access_request() {
        let xml = access_request("LICENSE", "user", "secret").unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\"?><AccessRequest xml:lang=\"en-US\"><AccessLicenseNumber>LICENSE</AccessLicenseNumber>\
             <UserId>user</UserId><Password>secret</Password></AccessRequest>"
        );
    }

    #[test]
    fn test_rate_request_packages() {
        let xml = serialize_rate_request(&shipment(), &RateEstimateOptions::default(), None).unwrap();

        assert!(xml.contains("<RequestAction>Rate</RequestAction><RequestOption>Shop</RequestOption>"));
        assert!(xml.contains("<PickupType><Code>01</Code></PickupType>"));
        assert!(xml.contains(
            "<Dimensions><UnitOfMeasurement><Code>IN</Code></UnitOfMeasurement>\
             <Length>12.00</Length><Width>8.00</Width><Height>6.00</Height></Dimensions>"
        ));
        assert!(xml.contains(
            "<PackageWeight><UnitOfMeasurement><Code>LBS</Code></UnitOfMeasurement><Weight>2.5</Weight></PackageWeight>"
        ));
        assert!(xml.contains("<ResidentialAddressIndicator/>"));
        assert!(!xml.contains("NegotiatedRatesIndicator"));
    }

    #[test]
    fn test_negotiated_rates_need_shipper_number() {
        let options = RateEstimateOptions {
            negotiated_rates: true,
            ..Default::default()
        };
        let xml = serialize_rate_request(&shipment(), &options, Some("A1B2C3")).unwrap();

        assert!(xml.contains("<ShipperNumber>A1B2C3</ShipperNumber>"));
        assert!(xml.contains("<RateInformation><NegotiatedRatesIndicator/></RateInformation>"));
    }

    #[test]
    fn test_time_in_transit_uses_zip5() {
        let options = TimingsOptions {
            pickup_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            invoice_total: None,
        };
        let xml = serialize_time_in_transit(&shipment(), &options).unwrap();

        assert!(xml.contains("<PostcodePrimaryLow>90210</PostcodePrimaryLow>"));
        assert!(xml.contains("<PickupDate>20240301</PickupDate>"));
        assert!(xml.contains("<TotalPackagesInShipment>1</TotalPackagesInShipment>"));
    }

    #[test]
    fn test_ship_confirm_package_options() {
        let mut options = LabelOptions::new("03");
        options.package_options.push(UpsPackageOptions {
            package_id: "box-1".to_string(),
            reference_numbers: vec![ReferenceNumber {
                code: "PO".to_string(),
                value: "PO-77".to_string(),
            }],
            delivery_confirmation: Some(DeliveryConfirmation::SignatureRequired),
            ..Default::default()
        });

        let xml = serialize_ship_confirm(&shipment(), &options, "A1B2C3").unwrap();

        assert!(xml.contains("<BillShipper><AccountNumber>A1B2C3</AccountNumber></BillShipper>"));
        assert!(xml.contains("<Service><Code>03</Code></Service>"));
        assert!(xml.contains("<ReferenceNumber><Code>PO</Code><Value>PO-77</Value></ReferenceNumber>"));
        assert!(xml.contains("<DeliveryConfirmation><DCISType>2</DCISType></DeliveryConfirmation>"));
        assert!(xml.contains(
            "<LabelSpecification><LabelPrintMethod><Code>GIF</Code></LabelPrintMethod>\
             <LabelImageFormat><Code>GIF</Code></LabelImageFormat></LabelSpecification>"
        ));
    }

    #[test]
    fn test_ship_confirm_thermal_label_stock() {
        let mut options = LabelOptions::new("03");
        options.label_format = "EPL".to_string();

        let xml = serialize_ship_confirm(&shipment(), &options, "A1B2C3").unwrap();
        assert!(xml.contains(
            "<LabelSpecification><LabelPrintMethod><Code>EPL</Code></LabelPrintMethod>\
             <LabelStockSize><Height>6</Height><Width>4</Width></LabelStockSize></LabelSpecification>"
        ));
        assert!(!xml.contains("LabelImageFormat"));

        options.label_format = "zpl".to_string();
        options.label_size = LabelSize { width: 4, height: 8 };
        let xml = serialize_ship_confirm(&shipment(), &options, "A1B2C3").unwrap();
        assert!(xml.contains("<LabelPrintMethod><Code>ZPL</Code></LabelPrintMethod>"));
        assert!(xml.contains("<LabelStockSize><Height>8</Height><Width>4</Width></LabelStockSize>"));
    }

    #[test]
    fn test_ship_accept() {
        let xml = serialize_ship_accept("DIGEST").unwrap();
        assert!(xml.ends_with("<ShipmentDigest>DIGEST</ShipmentDigest></ShipmentAcceptRequest>"));
    }

    #[test]
    fn test_serialization_is_repeatable() {
        let options = LabelOptions::new("03");
        assert_eq!(
            serialize_ship_confirm(&shipment(), &options, "A1B2C3").unwrap(),
            serialize_ship_confirm(&shipment(), &options, "A1B2C3").unwrap()
        );
        assert_eq!(
            serialize_rate_request(&shipment(), &RateEstimateOptions::default(), None).unwrap(),
            serialize_rate_request(&shipment(), &RateEstimateOptions::default(), None).unwrap()
        );
    }
}
