//! ShipEngine API Response Models

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ShipEngineError {
    pub error_source: Option<String>,
    pub error_type: Option<String>,
    pub error_code: Option<String>,
    pub message: String,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub request_id: Option<String>,
    #[serde(default)]
    pub errors: Vec<ShipEngineError>,
}

/// Amount with a lowercase ISO currency (`{"currency": "usd", "amount": 9.37}`)
#[derive(Debug, Clone, Deserialize)]
pub struct MonetaryValue {
    pub currency: String,
    pub amount: serde_json::Number,
}

// ============================================================================
// Carriers
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CarriersResponse {
    #[serde(default)]
    pub carriers: Vec<CarrierAccount>,
}

#[derive(Debug, Deserialize)]
pub struct CarrierAccount {
    pub carrier_id: String,
    pub carrier_code: String,
    pub account_number: Option<String>,
    pub nickname: Option<String>,
    pub friendly_name: String,
    #[serde(default)]
    pub primary: bool,
    pub balance: Option<serde_json::Number>,
    #[serde(default)]
    pub services: Vec<CarrierServiceEntry>,
}

#[derive(Debug, Deserialize)]
pub struct CarrierServiceEntry {
    pub service_code: String,
    pub name: String,
    #[serde(default)]
    pub domestic: bool,
    #[serde(default)]
    pub international: bool,
    #[serde(default)]
    pub is_multi_package_supported: bool,
}

// ============================================================================
// Rates
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RateEstimate {
    pub rate_id: Option<String>,
    pub carrier_id: Option<String>,
    pub carrier_code: Option<String>,
    pub service_type: Option<String>,
    pub service_code: String,
    pub shipping_amount: Option<MonetaryValue>,
    pub insurance_amount: Option<MonetaryValue>,
    pub confirmation_amount: Option<MonetaryValue>,
    pub other_amount: Option<MonetaryValue>,
    pub zone: Option<i64>,
    pub package_type: Option<String>,
    pub delivery_days: Option<i64>,
    #[serde(default)]
    pub guaranteed_service: bool,
    pub estimated_delivery_date: Option<String>,
    #[serde(default)]
    pub warning_messages: Vec<String>,
    #[serde(default)]
    pub error_messages: Vec<String>,
}

// ============================================================================
// Labels
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LabelResponse {
    pub label_id: String,
    pub status: Option<String>,
    pub shipment_id: Option<String>,
    pub tracking_number: Option<String>,
    pub shipment_cost: Option<MonetaryValue>,
    pub insurance_cost: Option<MonetaryValue>,
    pub label_format: Option<String>,
    pub label_download: LabelDownload,
}

#[derive(Debug, Deserialize)]
pub struct LabelDownload {
    /// URL, or base64 file contents for inline downloads
    pub href: Option<String>,
    pub pdf: Option<String>,
    pub png: Option<String>,
    pub zpl: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VoidLabelResponse {
    pub approved: bool,
    pub message: String,
}
