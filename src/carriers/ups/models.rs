//! UPS XML response models

use serde::Deserialize;

/// `<Response>` block present in every UPS reply
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseStatus {
    pub response_status_code: String,
    pub response_status_description: Option<String>,
    #[serde(default)]
    pub error: Vec<UpsError>,
}

impl ResponseStatus {
    pub fn is_failure(&self) -> bool {
        self.response_status_code.trim() == "0"
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpsError {
    pub error_severity: Option<String>,
    pub error_code: Option<String>,
    pub error_description: Option<String>,
}

/// Any UPS document, read only for its status block
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusOnly {
    pub response: ResponseStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Code {
    pub code: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Charges {
    pub currency_code: String,
    pub monetary_value: String,
}

// ============================================================================
// Rate
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RatingServiceSelectionResponse {
    pub response: ResponseStatus,
    #[serde(default)]
    pub rated_shipment: Vec<RatedShipment>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RatedShipment {
    pub service: Code,
    #[serde(default)]
    pub rated_shipment_warning: Vec<String>,
    pub billing_weight: Option<BillingWeight>,
    pub transportation_charges: Option<Charges>,
    pub service_options_charges: Option<Charges>,
    pub total_charges: Charges,
    pub guaranteed_days_to_delivery: Option<String>,
    pub scheduled_delivery_time: Option<String>,
    pub negotiated_rates: Option<NegotiatedRates>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BillingWeight {
    pub unit_of_measurement: Option<Code>,
    pub weight: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NegotiatedRates {
    pub net_summary_charges: NetSummaryCharges,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetSummaryCharges {
    pub grand_total: Charges,
}

// ============================================================================
// Time in transit
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimeInTransitResponse {
    pub response: ResponseStatus,
    pub transit_response: Option<TransitResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransitResponse {
    pub pickup_date: Option<String>,
    #[serde(default)]
    pub service_summary: Vec<ServiceSummary>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceSummary {
    pub service: Code,
    pub guaranteed: Option<Code>,
    pub estimated_arrival: EstimatedArrival,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EstimatedArrival {
    pub business_transit_days: Option<String>,
    pub pickup_date: Option<String>,
    pub date: String,
    pub time: Option<String>,
}

// ============================================================================
// Ship confirm / accept
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentCharges {
    pub total_charges: Charges,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentConfirmResponse {
    pub response: ResponseStatus,
    pub shipment_charges: Option<ShipmentCharges>,
    pub shipment_identification_number: Option<String>,
    pub shipment_digest: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentAcceptResponse {
    pub response: ResponseStatus,
    pub shipment_results: Option<ShipmentResults>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentResults {
    pub shipment_charges: Option<ShipmentCharges>,
    pub shipment_identification_number: Option<String>,
    #[serde(default)]
    pub package_results: Vec<PackageResults>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageResults {
    pub tracking_number: String,
    pub label_image: Option<LabelImage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LabelImage {
    pub label_image_format: Code,
    pub graphic_image: String,
}
