//! UPS Freight API Response Models

use serde::Deserialize;

/// UPS JSON sends a lone element as an object and several as an array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorEntry {
    pub code: Option<String>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<ApiErrorEntry>,
}

/// `{"response": {"errors": [...]}}`
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub response: ErrorBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CodeDescription {
    pub code: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnitValue {
    pub value: String,
    pub unit_of_measurement: Option<CodeDescription>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Charge {
    pub currency_code: String,
    pub monetary_value: String,
}

/// One line of the cost breakdown
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RateLine {
    #[serde(rename = "Type")]
    pub rate_type: CodeDescription,
    pub factor: UnitValue,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimeInTransit {
    pub days_in_transit: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Alert {
    pub code: Option<String>,
    pub description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FreightRateResponse {
    #[serde(default)]
    pub rate: OneOrMany<RateLine>,
    pub total_shipment_charge: Charge,
    pub billable_shipment_weight: Option<UnitValue>,
    pub service: Option<CodeDescription>,
    pub time_in_transit: Option<TimeInTransit>,
    #[serde(default)]
    pub alert: OneOrMany<Alert>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RateEnvelope {
    pub freight_rate_response: FreightRateResponse,
}
