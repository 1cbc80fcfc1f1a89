//! Current-weather client for OpenWeatherMap-compatible endpoints.

use std::future::Future;
use std::sync::Arc;

use reqwest::Client;
use skycast_core::{ReqwestErrorExt, WeatherConfig};
use tracing::instrument;

use crate::types::{CurrentWeatherResponse, LookupError, WeatherSnapshot};

/// Something that can answer "what's the weather at `query` right now".
pub trait WeatherSource {
    fn current(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<WeatherSnapshot, LookupError>> + Send;
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: String,
    api_key: Option<String>,
}

impl WeatherProvider {
    pub fn new(config: &WeatherConfig) -> Result<Self, LookupError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ReqwestErrorExt::into_network_error)?;

        if !config.has_api_key() {
            tracing::warn!("Weather provider created without an API key");
        }

        Ok(Self {
            client: Arc::new(client),
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch current conditions for `query`. Units are always imperial.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, query: &str) -> Result<WeatherSnapshot, LookupError> {
        let mut request = self
            .client
            .get(&self.base_url)
            .query(&[("q", query), ("units", "imperial")]);
        if let Some(key) = &self.api_key {
            request = request.query(&[("appid", key.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(ReqwestErrorExt::into_network_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::debug!("Weather lookup returned status {}", status);
            return Err(LookupError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: CurrentWeatherResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))?;
        let snapshot = body.into_snapshot()?;

        tracing::info!(
            "Fetched weather for {}, {}: {}°F {}",
            snapshot.place,
            snapshot.country,
            snapshot.temperature_f,
            snapshot.condition
        );
        Ok(snapshot)
    }
}

impl WeatherSource for WeatherProvider {
    async fn current(&self, query: &str) -> Result<WeatherSnapshot, LookupError> {
        self.fetch(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_uses_configured_base_url() {
        let config = WeatherConfig {
            api_base_url: "http://localhost:1234/weather".to_string(),
            ..WeatherConfig::default()
        };
        let provider = WeatherProvider::new(&config).unwrap();
        assert_eq!(provider.base_url(), "http://localhost:1234/weather");
    }

    #[test]
    fn test_provider_accepts_timeout() {
        let config = WeatherConfig {
            request_timeout_secs: Some(3),
            api_key: Some("k".to_string()),
            ..WeatherConfig::default()
        };
        assert!(WeatherProvider::new(&config).is_ok());
    }
}
