//! G2Mint API Response Models

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ErrorEntry {
    pub code: Option<String>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub struct Charge {
    pub code: Option<String>,
    pub description: Option<String>,
    pub amount: serde_json::Number,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub quote_id: String,
    pub carrier_name: Option<String>,
    pub carrier_scac: Option<String>,
    pub service_level: String,
    pub total_charge: serde_json::Number,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub transit_days: Option<i64>,
    pub estimated_delivery_date: Option<String>,
    #[serde(default)]
    pub charges: Vec<Charge>,
}

fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Debug, Deserialize)]
pub struct QuoteResponse {
    #[serde(default)]
    pub quotes: Vec<Quote>,
}
