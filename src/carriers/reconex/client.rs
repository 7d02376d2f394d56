//! Reconex API client

use async_trait::async_trait;

use super::options::LoadOptions;
use super::{mapper, request, API_BASE, SHIPPING_METHODS};
use crate::carriers::http_client::{HttpClient, Request};
use crate::carriers::traits::{
    ApiError, CarrierCredentials, CarrierResult, CarrierService, ConfigurableService,
};
use crate::domain::{Shipment, ShipmentInformation, ShippingMethod};

/// Reconex API client
#[derive(Debug, Clone)]
pub struct ReconexService {
    client: HttpClient,
    api_key: String,
    base_url: String,
    debug: bool,
}

impl ReconexService {
    pub fn new(api_key: impl Into<String>) -> Self {
        ReconexService {
            client: HttpClient::new(mapper::error_message),
            api_key: api_key.into(),
            base_url: API_BASE.to_string(),
            debug: false,
        }
    }

    pub fn from_credentials(credentials: &CarrierCredentials) -> Result<Self, ApiError> {
        Ok(Self::new(CarrierCredentials::require(&credentials.api_key, "RECONEX_API_KEY")?))
    }

    fn request_post(&self, path: &str, body: String) -> Request {
        Request::post(format!("{}{}", self.base_url, path), body)
            .json()
            .header("ApiKey", &self.api_key)
            .debug(self.debug)
    }

    /// Tender a load for the shipment
    pub async fn create_load(&self, shipment: &Shipment, options: &LoadOptions) -> CarrierResult<ShipmentInformation> {
        let body = request::serialize_load(shipment, options);
        let request = self.request_post("/api/CreateLoad", body.to_string());
        let response = self.client.post(&request).await?;
        mapper::parse_create_load(&request, &response)
    }

    pub async fn get_load_info(&self, load_ids: &[String]) -> CarrierResult<Vec<ShipmentInformation>> {
        let body = request::serialize_load_info(load_ids);
        let request = self.request_post("/api/GetLoadInfo", body.to_string());
        let response = self.client.post(&request).await?;
        mapper::parse_load_info(&request, &response)
    }
}

impl ConfigurableService for ReconexService {
    fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

// Reconex does not quote rates or timings; the trait defaults report them unsupported.
#[async_trait]
impl CarrierService for ReconexService {
    fn code(&self) -> &'static str {
        "reconex"
    }

    fn name(&self) -> &'static str {
        "Reconex"
    }

    fn shipping_methods(&self) -> &'static [ShippingMethod] {
        &SHIPPING_METHODS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rates_unsupported() {
        let service = ReconexService::new("key");
        let failure = service.rate_estimates(&Shipment::default()).await.unwrap_err();

        assert!(matches!(failure.error, ApiError::Unsupported(_)));
    }

    #[test]
    fn test_api_key_header() {
        let request = ReconexService::new("key").request_post("/api/CreateLoad", "{}".to_string());
        assert!(request.headers.iter().any(|(k, v)| k == "ApiKey" && v == "key"));
    }
}
