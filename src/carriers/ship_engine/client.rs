//! ShipEngine API client

use async_trait::async_trait;
use url::Url;

use super::options::{LabelOptions, RateEstimatesOptions};
use super::{mapper, request, API_BASE, SHIPPING_METHODS};
use crate::carriers::http_client::{HttpClient, Request};
use crate::carriers::traits::{
    ApiError, CarrierCredentials, CarrierResult, CarrierService, ConfigurableService,
};
use crate::domain::{Carrier, Rate, Shipment, ShipmentInformation, ShippingMethod};

/// ShipEngine API client
#[derive(Debug, Clone)]
pub struct ShipEngineService {
    client: HttpClient,
    api_key: String,
    /// Carrier id used for rate estimates made through [`CarrierService`]
    default_carrier_id: Option<String>,
    base_url: String,
    debug: bool,
}

impl ShipEngineService {
    pub fn new(api_key: impl Into<String>) -> Self {
        ShipEngineService {
            client: HttpClient::new(mapper::error_message),
            api_key: api_key.into(),
            default_carrier_id: None,
            base_url: API_BASE.to_string(),
            debug: false,
        }
    }

    pub fn from_credentials(credentials: &CarrierCredentials) -> Result<Self, ApiError> {
        Ok(Self::new(CarrierCredentials::require(&credentials.api_key, "SHIP_ENGINE_API_KEY")?)
            .with_default_carrier_id(credentials.account_number.clone()))
    }

    pub fn with_default_carrier_id(mut self, carrier_id: Option<String>) -> Self {
        self.default_carrier_id = carrier_id;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `/v1/labels/{label_id}/void` with the id as one encoded segment
    fn void_url(&self, label_id: &str) -> Result<String, ApiError> {
        let mut url = Url::parse(&self.url("/v1/labels"))
            .map_err(|e| ApiError::InvalidOption(format!("ShipEngine URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidOption(format!("ShipEngine base URL {} takes no path", self.base_url)))?
            .push(label_id)
            .push("void");
        Ok(url.into())
    }

    fn authorize(&self, request: Request) -> Request {
        request.json().header("API-Key", &self.api_key).debug(self.debug)
    }

    /// Carriers connected to the account
    pub async fn carriers(&self) -> CarrierResult<Vec<Carrier>> {
        let request = self.authorize(Request::get(self.url("/v1/carriers")));
        let response = self.client.get(&request).await?;
        mapper::parse_carriers(&request, &response)
    }

    pub async fn rate_estimates(
        &self,
        shipment: &Shipment,
        options: &RateEstimatesOptions,
    ) -> CarrierResult<Vec<Rate>> {
        let body = request::serialize_rate_estimate(shipment, options);
        let request = self.authorize(Request::post(self.url("/v1/rates/estimate"), body.to_string()));
        let response = self.client.post(&request).await?;
        mapper::parse_rate_estimates(&request, &response)
    }

    /// Buy a label
    pub async fn labels(&self, shipment: &Shipment, options: &LabelOptions) -> CarrierResult<ShipmentInformation> {
        let body = request::serialize_label(shipment, options);
        let request = self.authorize(Request::post(self.url("/v1/labels"), body.to_string()));
        let response = self.client.post(&request).await?;
        mapper::parse_label(&request, &response, options.download_type)
    }

    pub async fn void_label(&self, label_id: &str) -> CarrierResult<String> {
        let request = self.authorize(Request::put(self.void_url(label_id)?, ""));
        let response = self.client.put(&request).await?;
        mapper::parse_void_label(&request, &response)
    }
}

impl ConfigurableService for ShipEngineService {
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
impl CarrierService for ShipEngineService {
    fn code(&self) -> &'static str {
        "ship_engine"
    }

    fn name(&self) -> &'static str {
        "ShipEngine"
    }

    fn shipping_methods(&self) -> &'static [ShippingMethod] {
        &SHIPPING_METHODS
    }

    async fn rate_estimates(&self, shipment: &Shipment) -> CarrierResult<Vec<Rate>> {
        let carrier_id = self
            .default_carrier_id
            .clone()
            .ok_or_else(|| ApiError::NotConfigured("SHIP_ENGINE_ACCOUNT_NUMBER is not set".to_string()))?;
        ShipEngineService::rate_estimates(self, shipment, &RateEstimatesOptions::new(carrier_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_creation() {
        let service = ShipEngineService::new("TEST_key");
        assert_eq!(service.code(), "ship_engine");
        assert_eq!(service.url("/v1/carriers"), "https://api.shipengine.com/v1/carriers");
        assert!(service.default_carrier_id.is_none());
    }

    #[test]
    fn test_requests_carry_api_key() {
        let service = ShipEngineService::new("TEST_key").with_debug(true);
        let request = service.authorize(Request::get(service.url("/v1/carriers")));

        assert!(request.headers.contains(&("API-Key".to_string(), "TEST_key".to_string())));
        assert!(request.debug);
    }

    #[test]
    fn test_void_url_encodes_label_id() {
        let service = ShipEngineService::new("TEST_key");

        assert_eq!(
            service.void_url("se-28529731").unwrap(),
            "https://api.shipengine.com/v1/labels/se-28529731/void"
        );
        assert_eq!(
            service.void_url("se-1/../carriers?x#y").unwrap(),
            "https://api.shipengine.com/v1/labels/se-1%2F..%2Fcarriers%3Fx%23y/void"
        );
    }

    #[tokio::test]
    async fn test_trait_rates_need_carrier_id() {
        let service = ShipEngineService::new("TEST_key");
        let failure = CarrierService::rate_estimates(&service, &Shipment::default()).await.unwrap_err();
        assert!(matches!(failure.error, ApiError::NotConfigured(_)));
    }
}
