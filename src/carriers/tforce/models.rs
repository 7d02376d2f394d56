//! TForce Freight API Response Models

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseStatus {
    pub code: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub response_status: Option<ResponseStatus>,
}

/// Gateway error (`{"error": {"code": "401", "message": "..."}}`)
#[derive(Debug, Deserialize)]
pub struct GatewayError {
    pub code: Option<String>,
    pub message: Option<String>,
}

/// Fields any TForce error body may carry
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub summary: Option<Summary>,
    pub error: Option<GatewayError>,
}

#[derive(Debug, Deserialize)]
pub struct CodeDescription {
    pub code: String,
    pub description: Option<String>,
}

// ============================================================================
// Rating
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RateResponse {
    pub summary: Option<Summary>,
    #[serde(default)]
    pub detail: Vec<RateDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateDetail {
    pub service: CodeDescription,
    #[serde(default)]
    pub rate: Vec<RateLine>,
    pub shipment_charges: ShipmentCharges,
    pub time_in_transit: Option<TimeInTransit>,
    pub quote_number: Option<String>,
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

/// One line of the cost breakdown
#[derive(Debug, Deserialize)]
pub struct RateLine {
    pub code: String,
    pub description: Option<String>,
    pub value: String,
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ShipmentCharges {
    pub total: Amount,
}

#[derive(Debug, Deserialize)]
pub struct Amount {
    pub currency: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInTransit {
    pub time_in_transit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Alert {
    pub code: Option<String>,
    pub message: String,
}

// ============================================================================
// Bill of lading
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct BolResponse {
    pub summary: Option<Summary>,
    pub detail: BolDetail,
    pub documents: Option<Documents>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BolDetail {
    pub bol_id: Option<serde_json::Value>,
    pub pro: Option<String>,
    pub pickup: Option<Pickup>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pickup {
    pub confirmation_number: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Documents {
    #[serde(default)]
    pub image: Vec<DocumentImage>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentImage {
    #[serde(rename = "type")]
    pub document_type: CodeDescription,
    pub format: CodeDescription,
    pub data: String,
}
