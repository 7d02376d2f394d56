//! USPS Web Tools client

use async_trait::async_trait;

use super::options::RateEstimateOptions;
use super::{mapper, request, API_BASE, SHIPPING_METHODS, TEST_API_BASE};
use crate::carriers::http_client::{HttpClient, Request};
use crate::carriers::traits::{
    ApiError, CarrierCredentials, CarrierResult, CarrierService, ConfigurableService,
};
use crate::domain::{Rate, Shipment, ShippingMethod};

/// USPS Web Tools client
#[derive(Debug, Clone)]
pub struct UspsService {
    client: HttpClient,
    user_id: String,
    base_url: String,
    debug: bool,
}

impl UspsService {
    pub fn new(user_id: impl Into<String>) -> Self {
        UspsService {
            client: HttpClient::new(mapper::error_message),
            user_id: user_id.into(),
            base_url: API_BASE.to_string(),
            debug: false,
        }
    }

    pub fn from_credentials(credentials: &CarrierCredentials) -> Result<Self, ApiError> {
        Ok(Self::new(CarrierCredentials::require(&credentials.login, "USPS_LOGIN")?))
    }

    /// RateV4 rates for all packages; only offers every package can use are returned
    pub async fn rate_estimates(&self, shipment: &Shipment, options: &RateEstimateOptions) -> CarrierResult<Vec<Rate>> {
        let document = request::serialize_rate_request(shipment, options, &self.user_id)?;
        let request = Request::get(request::rate_url(&self.base_url, &document)?).debug(self.debug);
        let response = self.client.get(&request).await?;

        let requested = request::requested_boxes(shipment, options);
        mapper::parse_rate_response(&request, &response, &requested, options.hold_for_pickup)
    }
}

impl ConfigurableService for UspsService {
    fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    fn with_test_mode(self, test: bool) -> Self {
        if test {
            self.with_base_url(TEST_API_BASE)
        } else {
            self
        }
    }
}

#[async_trait]
impl CarrierService for UspsService {
    fn code(&self) -> &'static str {
        "usps"
    }

    fn name(&self) -> &'static str {
        "USPS"
    }

    fn shipping_methods(&self) -> &'static [ShippingMethod] {
        &SHIPPING_METHODS
    }

    async fn rate_estimates(&self, shipment: &Shipment) -> CarrierResult<Vec<Rate>> {
        UspsService::rate_estimates(self, shipment, &RateEstimateOptions::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_creation() {
        let service = UspsService::new("USER1");
        assert_eq!(service.code(), "usps");
        assert_eq!(service.carrier().shipping_methods.len(), 6);
    }

    #[test]
    fn test_from_credentials_uses_login() {
        let credentials = CarrierCredentials {
            login: Some("USER1".to_string()),
            ..Default::default()
        };
        assert_eq!(UspsService::from_credentials(&credentials).unwrap().user_id, "USER1");
    }
}
