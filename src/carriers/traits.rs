//! Carrier trait definitions and shared result types
//!
//! Every carrier integration returns [`CarrierResult`] values: parsed domain
//! data wrapped in an [`ApiResult`], or an [`ApiFailure`] that keeps the
//! original request and response for diagnostics. The [`CarrierService`]
//! trait gives a carrier-agnostic entry point with each carrier's default
//! options; the carrier-specific services expose the full option sets.

use async_trait::async_trait;
use thiserror::Error;

use crate::carriers::http_client::{Request, Response};
use crate::config::Settings;
use crate::domain::{Carrier, Rate, Shipment, ShippingMethod, Timing};

// ============================================================================
// Error Types
// ============================================================================

/// Carrier error kinds
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Http { status: u16, message: String },

    /// Failure reported by the carrier inside a successful HTTP response
    #[error("Carrier error: {0}")]
    Carrier(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Carrier not configured: {0}")]
    NotConfigured(String),

    #[error("Operation not supported: {0}")]
    Unsupported(&'static str),
}

impl From<crate::domain::MoneyError> for ApiError {
    fn from(e: crate::domain::MoneyError) -> Self {
        ApiError::Parse(e.to_string())
    }
}

impl From<chrono::ParseError> for ApiError {
    fn from(e: chrono::ParseError) -> Self {
        ApiError::Parse(format!("invalid date: {}", e))
    }
}

impl From<base64::DecodeError> for ApiError {
    fn from(e: base64::DecodeError) -> Self {
        ApiError::Parse(format!("invalid base64 document: {}", e))
    }
}

impl ApiError {
    /// Carrier message without the kind prefix, for display to end users
    pub fn message(&self) -> String {
        match self {
            ApiError::Http { message, .. } => message.clone(),
            ApiError::Carrier(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

/// A failed carrier call with the request/response that produced it
#[derive(Debug, Error)]
#[error("{error}")]
pub struct ApiFailure {
    #[source]
    pub error: ApiError,
    pub original_request: Option<Request>,
    pub original_response: Option<Response>,
}

impl ApiFailure {
    pub fn new(error: ApiError, request: &Request, response: Option<&Response>) -> Self {
        ApiFailure {
            error,
            original_request: Some(request.clone()),
            original_response: response.cloned(),
        }
    }
}

impl From<ApiError> for ApiFailure {
    fn from(error: ApiError) -> Self {
        ApiFailure {
            error,
            original_request: None,
            original_response: None,
        }
    }
}

/// Parsed carrier data, with request/response kept in debug mode
#[derive(Debug)]
pub struct ApiResult<T> {
    pub data: T,
    pub original_request: Option<Request>,
    pub original_response: Option<Response>,
}

impl<T> ApiResult<T> {
    pub fn new(data: T, request: &Request, response: &Response) -> Self {
        let (original_request, original_response) = if request.debug {
            (Some(request.clone()), Some(response.clone()))
        } else {
            (None, None)
        };

        ApiResult {
            data,
            original_request,
            original_response,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        ApiResult {
            data: f(self.data),
            original_request: self.original_request,
            original_response: self.original_response,
        }
    }
}

/// Result type for carrier operations
pub type CarrierResult<T> = Result<ApiResult<T>, ApiFailure>;

/// Shorthand for a parse step failing on a received response
pub(crate) fn parse_failure(error: impl Into<ApiError>, request: &Request, response: &Response) -> ApiFailure {
    ApiFailure::new(error.into(), request, Some(response))
}

// ============================================================================
// Credentials
// ============================================================================

/// Carrier credentials for authentication
#[derive(Debug, Clone, Default)]
pub struct CarrierCredentials {
    /// API key (R+L, ShipEngine, Reconex, G2Mint, UPS access license)
    pub api_key: Option<String>,

    /// Bearer token obtained by the caller (TForce)
    pub access_token: Option<String>,

    /// User id / login (UPS, USPS)
    pub login: Option<String>,

    pub password: Option<String>,

    /// Shipper or customer account number
    pub account_number: Option<String>,
}

impl CarrierCredentials {
    /// Create credentials from environment variables for a specific carrier
    pub fn from_env(carrier_code: &str) -> Self {
        let prefix = carrier_code.to_uppercase();
        CarrierCredentials {
            api_key: std::env::var(format!("{}_API_KEY", prefix)).ok(),
            access_token: std::env::var(format!("{}_ACCESS_TOKEN", prefix)).ok(),
            login: std::env::var(format!("{}_LOGIN", prefix)).ok(),
            password: std::env::var(format!("{}_PASSWORD", prefix)).ok(),
            account_number: std::env::var(format!("{}_ACCOUNT_NUMBER", prefix)).ok(),
        }
    }

    /// Check if any credentials are configured
    pub fn is_configured(&self) -> bool {
        [&self.api_key, &self.access_token, &self.login]
            .into_iter()
            .any(|value| value.as_deref().is_some_and(|v| !v.is_empty()))
    }

    /// A required credential, or `NotConfigured` naming its env var
    pub(crate) fn require(value: &Option<String>, name: &str) -> Result<String, ApiError> {
        value
            .clone()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::NotConfigured(format!("{} is not set", name)))
    }
}

// ============================================================================
// Carrier Trait
// ============================================================================

/// Carrier-agnostic interface over the carrier services
///
/// Calls made through this trait use each carrier's default options. Use the
/// concrete service types for per-shipment, per-package or per-item options.
#[async_trait]
pub trait CarrierService: Send + Sync {
    /// Carrier code (e.g., "rl", "usps")
    fn code(&self) -> &'static str;

    /// Carrier display name (e.g., "R+L Carriers")
    fn name(&self) -> &'static str;

    /// Shipping methods this integration knows about
    fn shipping_methods(&self) -> &'static [ShippingMethod];

    fn carrier(&self) -> Carrier {
        Carrier::new(self.code(), self.name(), self.code(), self.shipping_methods().to_vec())
    }

    /// Rates for a shipment with default options
    async fn rate_estimates(&self, _shipment: &Shipment) -> CarrierResult<Vec<Rate>> {
        Err(ApiError::Unsupported("rate estimates").into())
    }

    /// Transit timings for a shipment with default options
    async fn timings(&self, _shipment: &Shipment) -> CarrierResult<Vec<Timing>> {
        Err(ApiError::Unsupported("timings").into())
    }
}

/// Environment-level knobs every service accepts
pub trait ConfigurableService: Sized {
    fn with_base_url(self, base_url: &str) -> Self;

    fn with_debug(self, debug: bool) -> Self;

    /// Switch to the carrier's sandbox endpoint, if it has one
    fn with_test_mode(self, _test: bool) -> Self {
        self
    }

    fn configured(self, code: &str, settings: &Settings) -> Self {
        let service = self.with_test_mode(settings.test_mode).with_debug(settings.debug);
        match settings.base_url_for(code) {
            Some(url) => service.with_base_url(url),
            None => service,
        }
    }
}

// ============================================================================
// Service Factory
// ============================================================================

/// Known carrier codes
pub const CARRIER_CODES: [&str; 8] = [
    "rl",
    "ups",
    "ups_freight",
    "usps",
    "ship_engine",
    "tforce",
    "reconex",
    "g2mint",
];

/// Service factory for creating carrier services
pub struct ServiceFactory;

impl ServiceFactory {
    /// Create a service by carrier code
    pub fn create(
        code: &str,
        credentials: &CarrierCredentials,
        settings: &Settings,
    ) -> Result<Box<dyn CarrierService>, ApiError> {
        use crate::carriers::{g2mint, reconex, rl, ship_engine, tforce, ups, ups_freight, usps};

        let service: Box<dyn CarrierService> = match code {
            "rl" => Box::new(rl::RlService::from_credentials(credentials)?.configured(code, settings)),
            "ups" => Box::new(ups::UpsService::from_credentials(credentials)?.configured(code, settings)),
            "ups_freight" => Box::new(
                ups_freight::UpsFreightService::from_credentials(credentials)?.configured(code, settings),
            ),
            "usps" => Box::new(usps::UspsService::from_credentials(credentials)?.configured(code, settings)),
            "ship_engine" => Box::new(
                ship_engine::ShipEngineService::from_credentials(credentials)?.configured(code, settings),
            ),
            "tforce" => Box::new(tforce::TForceService::from_credentials(credentials)?.configured(code, settings)),
            "reconex" => Box::new(reconex::ReconexService::from_credentials(credentials)?.configured(code, settings)),
            "g2mint" => Box::new(g2mint::G2MintService::from_credentials(credentials)?.configured(code, settings)),
            other => return Err(ApiError::NotConfigured(format!("unknown carrier code {:?}", other))),
        };

        Ok(service)
    }

    /// Create all carriers that have credentials in the environment
    pub fn create_all_from_env(settings: &Settings) -> Vec<Box<dyn CarrierService>> {
        let mut services = Vec::new();

        for code in CARRIER_CODES {
            let credentials = CarrierCredentials::from_env(code);
            if credentials.is_configured() {
                match Self::create(code, &credentials, settings) {
                    Ok(service) => services.push(service),
                    Err(e) => tracing::warn!(carrier = code, error = %e, "Skipping carrier"),
                }
            }
        }

        services
    }
}
