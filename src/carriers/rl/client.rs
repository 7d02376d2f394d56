//! R+L API client

use async_trait::async_trait;
use chrono::Local;
use url::Url;

use super::options::{BolOptions, RateQuoteOptions, ShippingLabelOptions, TransitTimesOptions};
use super::{mapper, request, API_BASE, SHIPPING_METHODS};
use crate::carriers::http_client::{HttpClient, Request};
use crate::carriers::traits::{
    ApiError, CarrierCredentials, CarrierResult, CarrierService, ConfigurableService,
};
use crate::domain::{Rate, Shipment, ShipmentInformation, ShippingDocument, ShippingMethod, Timing};

/// R+L Carriers API client
#[derive(Debug, Clone)]
pub struct RlService {
    client: HttpClient,
    api_key: String,
    base_url: String,
    debug: bool,
}

impl RlService {
    pub fn new(api_key: impl Into<String>) -> Self {
        RlService {
            client: HttpClient::new(mapper::error_message),
            api_key: api_key.into(),
            base_url: API_BASE.to_string(),
            debug: false,
        }
    }

    pub fn from_credentials(credentials: &CarrierCredentials) -> Result<Self, ApiError> {
        Ok(Self::new(CarrierCredentials::require(&credentials.api_key, "RL_API_KEY")?))
    }

    fn request_get(&self, url: String) -> Request {
        Request::get(url)
            .header("apiKey", &self.api_key)
            .header("Accept", "application/json")
            .debug(self.debug)
    }

    fn request_post(&self, path: &str, body: String) -> Request {
        Request::post(format!("{}{}", self.base_url, path), body)
            .json()
            .header("apiKey", &self.api_key)
            .debug(self.debug)
    }

    fn document_url(&self, path: &str, params: &[(&str, String)]) -> Result<String, ApiError> {
        Url::parse_with_params(&format!("{}{}", self.base_url, path), params)
            .map(String::from)
            .map_err(|e| ApiError::InvalidOption(format!("document URL: {}", e)))
    }

    /// Quote all R+L service levels for a shipment
    pub async fn rate_quote(&self, shipment: &Shipment, options: &RateQuoteOptions) -> CarrierResult<Vec<Rate>> {
        let body = request::serialize_rate_quote(shipment, options);
        let request = self.request_post("/RateQuote", body.to_string());
        let response = self.client.post(&request).await?;
        mapper::parse_rate_quote(&request, &response)
    }

    pub async fn transit_times(
        &self,
        shipment: &Shipment,
        options: &TransitTimesOptions,
    ) -> CarrierResult<Vec<Timing>> {
        let url = request::transit_times_url(&self.base_url, shipment, options)?;
        let request = self.request_get(url);
        let response = self.client.get(&request).await?;
        mapper::parse_transit_times(&request, &response)
    }

    /// Create a BOL and schedule the pickup
    pub async fn create_bol(&self, shipment: &Shipment, options: &BolOptions) -> CarrierResult<ShipmentInformation> {
        let body = request::serialize_bol(shipment, options);
        let request = self.request_post("/BillOfLading", body.to_string());
        let response = self.client.post(&request).await?;
        mapper::parse_bol(&request, &response)
    }

    pub async fn print_bol(&self, pro_number: &str) -> CarrierResult<ShippingDocument> {
        let url = self.document_url("/BillOfLading/PrintBOL", &[("ProNumber", pro_number.to_string())])?;
        let request = self.request_get(url);
        let response = self.client.get(&request).await?;
        mapper::parse_print_bol(&request, &response, pro_number)
    }

    pub async fn print_shipping_labels(
        &self,
        pro_number: &str,
        options: &ShippingLabelOptions,
    ) -> CarrierResult<ShippingDocument> {
        let url = self.document_url(
            "/ShippingLabel",
            &[
                ("ProNumber", pro_number.to_string()),
                ("Style", options.style.to_string()),
                ("StartPosition", options.start_position.to_string()),
                ("NumberOfLabels", options.number_of_labels.to_string()),
            ],
        )?;
        let request = self.request_get(url);
        let response = self.client.get(&request).await?;
        mapper::parse_shipping_labels(&request, &response, pro_number)
    }
}

impl ConfigurableService for RlService {
    fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

#[async_trait]
impl CarrierService for RlService {
    fn code(&self) -> &'static str {
        "rl"
    }

    fn name(&self) -> &'static str {
        "R+L Carriers"
    }

    fn shipping_methods(&self) -> &'static [ShippingMethod] {
        &SHIPPING_METHODS
    }

    async fn rate_estimates(&self, shipment: &Shipment) -> CarrierResult<Vec<Rate>> {
        self.rate_quote(shipment, &RateQuoteOptions::new(Local::now().date_naive())).await
    }

    async fn timings(&self, shipment: &Shipment) -> CarrierResult<Vec<Timing>> {
        let options = TransitTimesOptions {
            pickup_date: Local::now().date_naive(),
        };
        self.transit_times(shipment, &options).await
    }
}
