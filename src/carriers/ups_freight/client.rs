//! UPS Freight API client

use async_trait::async_trait;
use chrono::Local;

use super::options::RatesOptions;
use super::{mapper, request, API_BASE, SHIPPING_METHODS, TEST_API_BASE};
use crate::carriers::http_client::{HttpClient, Request};
use crate::carriers::traits::{
    ApiError, CarrierCredentials, CarrierResult, CarrierService, ConfigurableService,
};
use crate::domain::{Rate, Shipment, ShippingMethod};

const RATE_PATH: &str = "/ship/v1801/freight/rating/ground";

/// UPS Freight API client
#[derive(Debug, Clone)]
pub struct UpsFreightService {
    client: HttpClient,
    license_number: String,
    username: String,
    password: String,
    shipper_number: Option<String>,
    base_url: String,
    debug: bool,
}

impl UpsFreightService {
    pub fn new(
        license_number: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        shipper_number: Option<String>,
    ) -> Self {
        UpsFreightService {
            client: HttpClient::new(mapper::error_message),
            license_number: license_number.into(),
            username: username.into(),
            password: password.into(),
            shipper_number,
            base_url: API_BASE.to_string(),
            debug: false,
        }
    }

    pub fn from_credentials(credentials: &CarrierCredentials) -> Result<Self, ApiError> {
        Ok(Self::new(
            CarrierCredentials::require(&credentials.api_key, "UPS_FREIGHT_API_KEY")?,
            CarrierCredentials::require(&credentials.login, "UPS_FREIGHT_LOGIN")?,
            CarrierCredentials::require(&credentials.password, "UPS_FREIGHT_PASSWORD")?,
            credentials.account_number.clone(),
        ))
    }

    fn request_post(&self, path: &str, body: String) -> Request {
        Request::post(format!("{}{}", self.base_url, path), body)
            .json()
            .header("AccessLicenseNumber", &self.license_number)
            .header("Username", &self.username)
            .header("Password", &self.password)
            .debug(self.debug)
    }

    /// Rate a ground freight shipment for one service
    pub async fn rate_estimates(&self, shipment: &Shipment, options: &RatesOptions) -> CarrierResult<Vec<Rate>> {
        let body = request::serialize_rates(shipment, options, self.shipper_number.as_deref());
        let request = self.request_post(RATE_PATH, body.to_string());
        let response = self.client.post(&request).await?;
        mapper::parse_rates(&request, &response, &options.service_code)
    }
}

impl ConfigurableService for UpsFreightService {
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
impl CarrierService for UpsFreightService {
    fn code(&self) -> &'static str {
        "ups_freight"
    }

    fn name(&self) -> &'static str {
        "UPS Freight"
    }

    fn shipping_methods(&self) -> &'static [ShippingMethod] {
        &SHIPPING_METHODS
    }

    async fn rate_estimates(&self, shipment: &Shipment) -> CarrierResult<Vec<Rate>> {
        let options = RatesOptions::new(Local::now().date_naive());
        UpsFreightService::rate_estimates(self, shipment, &options).await
    }
}
