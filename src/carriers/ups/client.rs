//! UPS XML API client

use async_trait::async_trait;
use chrono::Local;

use super::options::{LabelOptions, RateEstimateOptions, TimingsOptions};
use super::{mapper, request, API_BASE, SHIPPING_METHODS, TEST_API_BASE};
use crate::carriers::http_client::{HttpClient, Request};
use crate::carriers::traits::{
    ApiError, CarrierCredentials, CarrierResult, CarrierService, ConfigurableService,
};
use crate::domain::{Rate, Shipment, ShipmentInformation, ShippingMethod, Timing};

/// UPS API client
#[derive(Debug, Clone)]
pub struct UpsService {
    client: HttpClient,
    license_number: String,
    user_id: String,
    password: String,
    shipper_number: Option<String>,
    base_url: String,
    debug: bool,
}

impl UpsService {
    pub fn new(
        license_number: impl Into<String>,
        user_id: impl Into<String>,
        password: impl Into<String>,
        shipper_number: Option<String>,
    ) -> Self {
        UpsService {
            client: HttpClient::new(mapper::error_message),
            license_number: license_number.into(),
            user_id: user_id.into(),
            password: password.into(),
            shipper_number,
            base_url: API_BASE.to_string(),
            debug: false,
        }
    }

    pub fn from_credentials(credentials: &CarrierCredentials) -> Result<Self, ApiError> {
        Ok(Self::new(
            CarrierCredentials::require(&credentials.api_key, "UPS_API_KEY")?,
            CarrierCredentials::require(&credentials.login, "UPS_LOGIN")?,
            CarrierCredentials::require(&credentials.password, "UPS_PASSWORD")?,
            credentials.account_number.clone(),
        ))
    }

    /// Access request followed by the request document
    fn request_post(&self, path: &str, document: Result<String, ApiError>) -> Result<Request, ApiError> {
        let access = request::access_request(&self.license_number, &self.user_id, &self.password)?;
        Ok(Request::post(format!("{}{}", self.base_url, path), format!("{}{}", access, document?))
            .header("Content-Type", "application/xml")
            .debug(self.debug))
    }

    /// Shop rates for every service between origin and destination
    pub async fn rate_estimates(&self, shipment: &Shipment, options: &RateEstimateOptions) -> CarrierResult<Vec<Rate>> {
        let document = request::serialize_rate_request(shipment, options, self.shipper_number.as_deref());
        let request = self.request_post("/ups.app/xml/Rate", document)?;
        let response = self.client.post(&request).await?;
        mapper::parse_rate_response(&request, &response)
    }

    pub async fn timings(&self, shipment: &Shipment, options: &TimingsOptions) -> CarrierResult<Vec<Timing>> {
        let document = request::serialize_time_in_transit(shipment, options);
        let request = self.request_post("/ups.app/xml/TimeInTransit", document)?;
        let response = self.client.post(&request).await?;
        mapper::parse_time_in_transit(&request, &response)
    }

    /// ShipConfirm then ShipAccept; a failed confirm is returned without accepting
    pub async fn labels(&self, shipment: &Shipment, options: &LabelOptions) -> CarrierResult<ShipmentInformation> {
        let shipper_number = self
            .shipper_number
            .as_deref()
            .ok_or_else(|| ApiError::NotConfigured("UPS_ACCOUNT_NUMBER is not set".to_string()))?;

        let document = request::serialize_ship_confirm(shipment, options, shipper_number);
        let confirm_request = self.request_post("/ups.app/xml/ShipConfirm", document)?;
        let confirm_response = self.client.post(&confirm_request).await?;
        let digest = mapper::parse_ship_confirm(&confirm_request, &confirm_response)?.data;

        let accept_request = self.request_post("/ups.app/xml/ShipAccept", request::serialize_ship_accept(&digest))?;
        let accept_response = self.client.post(&accept_request).await?;
        mapper::parse_ship_accept(&accept_request, &accept_response)
    }
}

impl ConfigurableService for UpsService {
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
impl CarrierService for UpsService {
    fn code(&self) -> &'static str {
        "ups"
    }

    fn name(&self) -> &'static str {
        "UPS"
    }

    fn shipping_methods(&self) -> &'static [ShippingMethod] {
        &SHIPPING_METHODS
    }

    async fn rate_estimates(&self, shipment: &Shipment) -> CarrierResult<Vec<Rate>> {
        UpsService::rate_estimates(self, shipment, &RateEstimateOptions::default()).await
    }

    async fn timings(&self, shipment: &Shipment) -> CarrierResult<Vec<Timing>> {
        let options = TimingsOptions {
            pickup_date: Local::now().date_naive(),
            invoice_total: None,
        };
        UpsService::timings(self, shipment, &options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> UpsService {
        UpsService::new("LICENSE", "user", "secret", None)
    }

    #[test]
    fn test_service_creation() {
        let service = service();
        assert_eq!(service.code(), "ups");
        assert_eq!(service.shipping_methods().len(), 12);
        assert_eq!(service.base_url, API_BASE);
    }

    #[test]
    fn test_test_mode_switches_to_sandbox() {
        assert_eq!(service().with_test_mode(true).base_url, TEST_API_BASE);
        assert_eq!(service().with_test_mode(false).base_url, API_BASE);
    }

    #[test]
    fn test_request_body_starts_with_access_request() {
        let request = service()
            .request_post("/ups.app/xml/Rate", Ok("<Rate/>".to_string()))
            .unwrap();

        assert_eq!(request.url, "https://onlinetools.ups.com/ups.app/xml/Rate");
        let body = request.body.unwrap();
        assert!(body.starts_with("<?xml version=\"1.0\"?><AccessRequest"));
        assert!(body.ends_with("</AccessRequest><Rate/>"));
    }

    #[tokio::test]
    async fn test_labels_require_shipper_number() {
        let failure = service()
            .labels(&Shipment::default(), &LabelOptions::new("03"))
            .await
            .unwrap_err();
        assert!(matches!(failure.error, ApiError::NotConfigured(_)));
        assert!(failure.original_request.is_none());
    }
}
