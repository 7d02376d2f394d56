//! R+L API Response Models

use serde::Deserialize;

/// Error entry shared by all R+L responses
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RlError {
    pub property: Option<String>,
    pub error_message: String,
}

/// Fields every R+L response carries
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RlEnvelope {
    pub code: Option<i64>,
    #[serde(default)]
    pub errors: Vec<RlError>,
    #[serde(default)]
    pub messages: Vec<String>,
}

// ============================================================================
// Rate quote
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RateQuoteResponse {
    pub rate_quote: Option<RateQuote>,
    #[serde(flatten)]
    pub envelope: RlEnvelope,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RateQuote {
    pub quote_number: Option<String>,
    pub pickup_date: Option<String>,
    #[serde(default)]
    pub service_levels: Vec<ServiceLevel>,
    #[serde(default)]
    pub charges: Vec<Charge>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceLevel {
    pub code: String,
    pub title: Option<String>,
    pub service_days: Option<i64>,
    pub charge: Option<String>,
    pub net_charge: Option<String>,
}

/// One line of the quote's cost breakdown
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Charge {
    #[serde(rename = "Type")]
    pub charge_type: Option<String>,
    pub title: Option<String>,
    pub weight: Option<String>,
    pub rate: Option<String>,
    pub amount: Option<String>,
}

// ============================================================================
// Transit times
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransitTimesResponse {
    pub transit_time: Option<TransitTime>,
    #[serde(flatten)]
    pub envelope: RlEnvelope,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransitTime {
    pub pickup_date: String,
    pub service_days: Option<i64>,
    pub estimated_delivery_date: String,
}

// ============================================================================
// Bill of lading and documents
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BolResponse {
    pub pro_number: Option<String>,
    pub pickup_request_number: Option<String>,
    #[serde(flatten)]
    pub envelope: RlEnvelope,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrintBolResponse {
    pub bol_document: Option<String>,
    #[serde(flatten)]
    pub envelope: RlEnvelope,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShippingLabelResponse {
    pub shipping_labels_file: Option<String>,
    #[serde(flatten)]
    pub envelope: RlEnvelope,
}

/// Generic error body (`{"Message": "..."}`) returned by the API gateway
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GatewayError {
    pub message: Option<String>,
}
