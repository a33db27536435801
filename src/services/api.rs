use crate::models::{conversion::Conversion, currency::Currency, error::AppError};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;

// CONSTANTS
const BASE_URL: &str = "https://api.frankfurter.app";

// API CONFIGURATION
/// Configuration for the exchange-rate API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Constructs the full URL for a single conversion lookup.
    pub fn latest_url(&self, amount: f64, from: Currency, to: Currency) -> String {
        format!(
            "{}/latest?amount={}&from={}&to={}",
            self.base_url,
            amount,
            from.code(),
            to.code()
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
        }
    }
}

// API RESPONSE TYPES
#[derive(Deserialize, Debug)]
struct LatestRates {
    #[serde(default)]
    rates: HashMap<String, f64>,
    date: Option<NaiveDate>,
}

// RATE CLIENT
/// HTTP client for the exchange-rate API.
pub struct RateClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl RateClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Converts `amount` from one currency to another.
    ///
    /// A target code absent from the response map converts to `0.0`, and a
    /// missing date stays `None`; both match the service's loose contract.
    pub async fn convert(
        &self,
        amount: f64,
        from: Currency,
        to: Currency,
    ) -> Result<Conversion, AppError> {
        let url = self.config.latest_url(amount, from, to);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::BadStatus(status));
        }

        let latest: LatestRates = response
            .json()
            .await
            .map_err(|e| AppError::Api(format!("Failed to parse response: {e}")))?;

        Ok(Conversion {
            value: latest.rates.get(to.code()).copied().unwrap_or(0.0),
            date: latest.date,
        })
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Api(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::Api(format!("Request error: {error}"))
        } else {
            AppError::Unknown
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Converts an amount using the default configuration.
pub async fn convert(amount: f64, from: Currency, to: Currency) -> Result<Conversion, AppError> {
    RateClient::new()?.convert(amount, from, to).await
}
