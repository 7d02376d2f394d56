//! TForce Freight API client

use async_trait::async_trait;
use chrono::Local;

use super::options::{BolOptions, RatesOptions};
use super::{mapper, request, API_BASE, SHIPPING_METHODS};
use crate::carriers::http_client::{HttpClient, Request};
use crate::carriers::traits::{
    ApiError, CarrierCredentials, CarrierResult, CarrierService, ConfigurableService,
};
use crate::domain::{Rate, Shipment, ShipmentInformation, ShippingMethod};

const API_VERSION: &str = "v1";

/// TForce Freight API client
#[derive(Debug, Clone)]
pub struct TForceService {
    client: HttpClient,
    access_token: String,
    base_url: String,
    debug: bool,
}

impl TForceService {
    pub fn new(access_token: impl Into<String>) -> Self {
        TForceService {
            client: HttpClient::new(mapper::error_message),
            access_token: access_token.into(),
            base_url: API_BASE.to_string(),
            debug: false,
        }
    }

    pub fn from_credentials(credentials: &CarrierCredentials) -> Result<Self, ApiError> {
        Ok(Self::new(CarrierCredentials::require(
            &credentials.access_token,
            "TFORCE_ACCESS_TOKEN",
        )?))
    }

    fn request_post(&self, path: &str, body: String) -> Request {
        Request::post(format!("{}{}?api-version={}", self.base_url, path, API_VERSION), body)
            .json()
            .header("Authorization", &format!("Bearer {}", self.access_token))
            .debug(self.debug)
    }

    /// Rate an LTL shipment
    pub async fn rates(&self, shipment: &Shipment, options: &RatesOptions) -> CarrierResult<Vec<Rate>> {
        let body = request::serialize_rates(shipment, options);
        let request = self.request_post("/rating/getRate", body.to_string());
        let response = self.client.post(&request).await?;
        mapper::parse_rates(&request, &response)
    }

    /// Create a bill of lading, returning the PRO number and documents
    pub async fn create_bol(&self, shipment: &Shipment, options: &BolOptions) -> CarrierResult<ShipmentInformation> {
        let body = request::serialize_bol(shipment, options);
        let request = self.request_post("/shipping/ltl/createBOL", body.to_string());
        let response = self.client.post(&request).await?;
        mapper::parse_bol(&request, &response)
    }
}

impl ConfigurableService for TForceService {
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
impl CarrierService for TForceService {
    fn code(&self) -> &'static str {
        "tforce"
    }

    fn name(&self) -> &'static str {
        "TForce Freight"
    }

    fn shipping_methods(&self) -> &'static [ShippingMethod] {
        &SHIPPING_METHODS
    }

    async fn rate_estimates(&self, shipment: &Shipment) -> CarrierResult<Vec<Rate>> {
        self.rates(shipment, &RatesOptions::new(Local::now().date_naive())).await
    }
}
