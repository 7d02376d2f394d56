//! G2Mint API client

use async_trait::async_trait;
use chrono::Local;

use super::options::RateQuoteOptions;
use super::{mapper, request, API_BASE, SHIPPING_METHODS};
use crate::carriers::http_client::{HttpClient, Request};
use crate::carriers::traits::{
    ApiError, CarrierCredentials, CarrierResult, CarrierService, ConfigurableService,
};
use crate::domain::{Rate, Shipment, ShippingMethod};

/// G2Mint API client
#[derive(Debug, Clone)]
pub struct G2MintService {
    client: HttpClient,
    api_key: String,
    base_url: String,
    debug: bool,
}

impl G2MintService {
    pub fn new(api_key: impl Into<String>) -> Self {
        G2MintService {
            client: HttpClient::new(mapper::error_message),
            api_key: api_key.into(),
            base_url: API_BASE.to_string(),
            debug: false,
        }
    }

    pub fn from_credentials(credentials: &CarrierCredentials) -> Result<Self, ApiError> {
        Ok(Self::new(CarrierCredentials::require(&credentials.api_key, "G2MINT_API_KEY")?))
    }

    fn request_post(&self, path: &str, body: String) -> Request {
        Request::post(format!("{}{}", self.base_url, path), body)
            .json()
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .debug(self.debug)
    }

    /// Marketplace quotes for an LTL shipment
    pub async fn rate_quote(&self, shipment: &Shipment, options: &RateQuoteOptions) -> CarrierResult<Vec<Rate>> {
        let body = request::serialize_rate_quote(shipment, options);
        let request = self.request_post("/api/v1/rates/quote", body.to_string());
        let response = self.client.post(&request).await?;
        mapper::parse_rate_quote(&request, &response)
    }
}

impl ConfigurableService for G2MintService {
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
impl CarrierService for G2MintService {
    fn code(&self) -> &'static str {
        "g2mint"
    }

    fn name(&self) -> &'static str {
        "G2Mint"
    }

    fn shipping_methods(&self) -> &'static [ShippingMethod] {
        &SHIPPING_METHODS
    }

    async fn rate_estimates(&self, shipment: &Shipment) -> CarrierResult<Vec<Rate>> {
        self.rate_quote(shipment, &RateQuoteOptions::new(Local::now().date_naive())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_creation() {
        let service = G2MintService::new("key").with_debug(true);

        assert_eq!(service.code(), "g2mint");
        assert!(service.debug);
        assert!(service
            .request_post("/api/v1/rates/quote", "{}".to_string())
            .headers
            .contains(&("Authorization".to_string(), "Bearer key".to_string())));
    }
}
