//! HTTP client for carrier APIs
//!
//! A thin wrapper over `reqwest` that issues exactly one call per request and
//! turns the outcome into a uniform `(status, body, headers)` [`Response`].
//! Transport errors and non-2xx statuses become [`ApiFailure`] values carrying
//! the original request/response; the message of a non-2xx failure comes
//! from the carrier's own error parser.

use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use tracing::{debug, warn};

use crate::carriers::traits::{ApiError, ApiFailure};

/// HTTP verb of a carrier request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

/// Outgoing carrier request, kept for diagnostics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
    pub http_method: HttpMethod,
    pub url: String,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
    /// Keep request/response on successful results
    pub debug: bool,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Request {
            http_method: HttpMethod::Get,
            url: url.into(),
            body: None,
            headers: Vec::new(),
            debug: false,
        }
    }

    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        Request {
            http_method: HttpMethod::Post,
            body: Some(body.into()),
            ..Self::get(url)
        }
    }

    pub fn put(url: impl Into<String>, body: impl Into<String>) -> Self {
        Request {
            http_method: HttpMethod::Put,
            body: Some(body.into()),
            ..Self::get(url)
        }
    }

    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    /// Add `Content-Type`/`Accept` headers for JSON APIs
    pub fn json(self) -> Self {
        self.header("Content-Type", "application/json")
            .header("Accept", "application/json")
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Carrier response as received
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub status: u16,
    pub body: String,
    pub headers: Vec<(String, String)>,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Response {
            status,
            body: body.into(),
            headers: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Extracts a human-readable message from a carrier's error body
pub type ErrorParser = fn(&Response) -> Option<String>;

/// HTTP client bound to one carrier's error format
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    error_parser: ErrorParser,
}

impl HttpClient {
    pub fn new(error_parser: ErrorParser) -> Self {
        let client = Client::builder()
            .user_agent(concat!("carrier-bridge/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        HttpClient { client, error_parser }
    }

    pub async fn get(&self, request: &Request) -> Result<Response, ApiFailure> {
        self.execute(self.client.get(&request.url), request).await
    }

    pub async fn post(&self, request: &Request) -> Result<Response, ApiFailure> {
        self.execute(self.client.post(&request.url), request).await
    }

    pub async fn put(&self, request: &Request) -> Result<Response, ApiFailure> {
        self.execute(self.client.put(&request.url), request).await
    }

    /// Dispatch on the request's own method
    pub async fn send(&self, request: &Request) -> Result<Response, ApiFailure> {
        match request.http_method {
            HttpMethod::Get => self.get(request).await,
            HttpMethod::Post => self.post(request).await,
            HttpMethod::Put => self.put(request).await,
        }
    }

    async fn execute(&self, mut builder: RequestBuilder, request: &Request) -> Result<Response, ApiFailure> {
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        debug!(method = ?request.http_method, url = %request.url, "Carrier API request");

        let raw = match builder.send().await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(url = %request.url, error = %e, "Carrier API transport error");
                return Err(ApiFailure::new(ApiError::Transport(e), request, None));
            }
        };

        let status = raw.status();
        let headers = raw
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or_default().to_string()))
            .collect();
        let body = match raw.text().await {
            Ok(body) => body,
            Err(e) => return Err(ApiFailure::new(ApiError::Transport(e), request, None)),
        };

        let response = Response {
            status: status.as_u16(),
            body,
            headers,
        };

        if !response.is_success() {
            let message = (self.error_parser)(&response).unwrap_or_else(|| {
                if response.body.trim().is_empty() {
                    status.canonical_reason().unwrap_or("Unknown error").to_string()
                } else {
                    response.body.clone()
                }
            });

            warn!(url = %request.url, status = response.status, message = %message, "Carrier API error");

            return Err(ApiFailure::new(
                ApiError::Http {
                    status: response.status,
                    message,
                },
                request,
                Some(&response),
            ));
        }

        Ok(response)
    }
}
