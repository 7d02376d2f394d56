//! UPS Freight, Reconex and G2Mint round trips against a mock server

use carrier_bridge::carriers::g2mint::{G2MintService, RateQuoteOptions};
use carrier_bridge::carriers::reconex::{LoadOptions, ReconexService};
use carrier_bridge::carriers::ups_freight::{RatesOptions, UpsFreightService};
use carrier_bridge::carriers::{ApiError, CarrierService, ConfigurableService};
use carrier_bridge::domain::Money;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::{fixture, freight_shipment, pickup_date};

// ============================================================================
// UPS Freight
// ============================================================================

fn ups_freight(server: &MockServer) -> UpsFreightService {
    UpsFreightService::new("LICENSE", "shipper", "secret", Some("A1B2C3".to_string())).with_base_url(&server.uri())
}

#[tokio::test]
async fn test_ups_freight_rate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ship/v1801/freight/rating/ground"))
        .and(header("AccessLicenseNumber", "LICENSE"))
        .and(header("Username", "shipper"))
        .and(body_partial_json(json!({
            "FreightRateRequest": {
                "Service": {"Code": "308"},
                "HandlingUnitOne": {"Quantity": "4"},
                "PickupRequest": {"PickupDate": "20240304"},
                "PaymentInformation": {"Payer": {"ShipperNumber": "A1B2C3"}},
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("ups_freight", "rate_success.json")))
        .mount(&server)
        .await;

    let rates = ups_freight(&server)
        .rate_estimates(&freight_shipment(), &RatesOptions::new(pickup_date()))
        .await
        .unwrap()
        .data;

    assert_eq!(rates.len(), 1);
    let rate = &rates[0];
    assert_eq!(rate.shipping_method.service_code, "308");
    assert_eq!(rate.total_amount(), Some(Money::from_cents(52834, "USD")));
    assert_eq!(rate.data["billable_weight"], "450");
    assert_eq!(rate.data["days_in_transit"], 2);
    assert_eq!(rate.data["cost_breakdown"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_ups_freight_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ship/v1801/freight/rating/ground"))
        .respond_with(ResponseTemplate::new(400).set_body_string(fixture("ups_freight", "rate_failure.json")))
        .mount(&server)
        .await;

    let failure = ups_freight(&server)
        .rate_estimates(&freight_shipment(), &RatesOptions::new(pickup_date()))
        .await
        .unwrap_err();

    assert_eq!(failure.error.message(), "Missing or Invalid Ship From Postal Code");
}

// ============================================================================
// Reconex
// ============================================================================

fn reconex(server: &MockServer) -> ReconexService {
    ReconexService::new("rx-key").with_base_url(&server.uri())
}

#[tokio::test]
async fn test_reconex_create_load() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/CreateLoad"))
        .and(header("ApiKey", "rx-key"))
        .and(body_partial_json(json!({"mode": "LTL", "pickupDate": "2024-03-04"})))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("reconex", "create_load_success.json")))
        .mount(&server)
        .await;

    let information = reconex(&server)
        .create_load(&freight_shipment(), &LoadOptions::new(pickup_date()))
        .await
        .unwrap()
        .data;

    assert_eq!(information.load_id.as_deref(), Some("RX-204118"));
    assert_eq!(information.bol_number.as_deref(), Some("BOL-204118"));
    assert_eq!(information.pro_number, None);
    assert_eq!(information.data["status"], "Tendered");
}

#[tokio::test]
async fn test_reconex_load_info() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/GetLoadInfo"))
        .and(body_json(json!({"loadIds": ["RX-204118", "RX-204119"]})))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("reconex", "load_info_success.json")))
        .mount(&server)
        .await;

    let ids = vec!["RX-204118".to_string(), "RX-204119".to_string()];
    let loads = reconex(&server).get_load_info(&ids).await.unwrap().data;

    assert_eq!(loads.len(), 2);
    assert_eq!(loads[0].pro_number.as_deref(), Some("88120931"));
    assert_eq!(loads[0].pickup_number.as_deref(), Some("PU-5521"));
    assert_eq!(loads[0].cost, Some(Money::from_cents(84216, "USD")));
    assert_eq!(loads[0].data["carrier"], "Estes Express");
    assert_eq!(loads[1].cost, None);
    assert_eq!(loads[1].data["status"], "Tendered");
}

#[tokio::test]
async fn test_reconex_rejected_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/CreateLoad"))
        .respond_with(ResponseTemplate::new(401).set_body_string(fixture("reconex", "unauthorized.json")))
        .mount(&server)
        .await;

    let failure = reconex(&server)
        .create_load(&freight_shipment(), &LoadOptions::new(pickup_date()))
        .await
        .unwrap_err();

    assert!(matches!(failure.error, ApiError::Http { status: 401, ref message } if message == "Invalid API key"));
}

// ============================================================================
// G2Mint
// ============================================================================

fn g2mint(server: &MockServer) -> G2MintService {
    G2MintService::new("g2-key").with_base_url(&server.uri())
}

#[tokio::test]
async fn test_g2mint_rate_quote() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/rates/quote"))
        .and(header("Authorization", "Bearer g2-key"))
        .and(body_partial_json(json!({"pickupDate": "2024-03-04"})))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("g2mint", "quote_success.json")))
        .mount(&server)
        .await;

    let rates = g2mint(&server)
        .rate_quote(&freight_shipment(), &RateQuoteOptions::new(pickup_date()))
        .await
        .unwrap()
        .data;

    assert_eq!(rates.len(), 2);

    let standard = &rates[0];
    assert_eq!(standard.shipping_method.name, "G2Mint LTL Standard");
    assert_eq!(standard.remote_service_id.as_deref(), Some("G2M-7731-A"));
    assert_eq!(standard.total_amount(), Some(Money::from_cents(43612, "USD")));
    assert_eq!(
        standard.delivery_date.map(|d| d.date()),
        NaiveDate::from_ymd_opt(2024, 7, 4)
    );
    assert_eq!(standard.data["carrier_scac"], "ODFL");
    assert_eq!(standard.data["days_in_transit"], 3);

    let guaranteed = &rates[1];
    assert_eq!(guaranteed.shipping_method.service_code, "guaranteed");
    assert_eq!(guaranteed.total_amount(), Some(Money::from_cents(51200, "USD")));
    assert_eq!(guaranteed.delivery_date, None);
}

#[tokio::test]
async fn test_g2mint_validation_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/rates/quote"))
        .respond_with(ResponseTemplate::new(422).set_body_string(fixture("g2mint", "quote_failure.json")))
        .mount(&server)
        .await;

    let service = g2mint(&server);
    let failure = CarrierService::rate_estimates(&service, &freight_shipment()).await.unwrap_err();

    assert_eq!(
        failure.error.message(),
        "Freight class 42 is not valid, Line item weight is required"
    );
}
