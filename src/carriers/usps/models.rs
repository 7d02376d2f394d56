//! USPS RateV4 response models

use serde::Deserialize;

/// `<Error>` document or element
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UspsError {
    pub number: Option<String>,
    pub source: Option<String>,
    pub description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RateV4Response {
    #[serde(default)]
    pub package: Vec<PackageResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageResponse {
    #[serde(rename = "@ID")]
    pub id: String,
    pub error: Option<UspsError>,
    #[serde(default)]
    pub postage: Vec<Postage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Postage {
    #[serde(rename = "@CLASSID")]
    pub class_id: Option<String>,
    pub mail_service: String,
    pub rate: String,
    pub commercial_rate: Option<String>,
}
