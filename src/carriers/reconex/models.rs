//! Reconex API Response Models

use serde::Deserialize;

/// Any Reconex body may carry `errors`
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoadResponse {
    pub load_id: Option<String>,
    pub status: Option<String>,
    pub pro_number: Option<String>,
    pub bol_number: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadInfo {
    pub load_id: String,
    pub status: Option<String>,
    pub pro_number: Option<String>,
    pub bol_number: Option<String>,
    pub pickup_number: Option<String>,
    pub carrier: Option<String>,
    pub pickup_date: Option<String>,
    pub delivery_date: Option<String>,
    pub total_cost: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoadInfoResponse {
    #[serde(default)]
    pub loads: Vec<LoadInfo>,
    #[serde(default)]
    pub errors: Vec<String>,
}
