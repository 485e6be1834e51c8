//! Random Duck Fetch Module
//!
//! Thin client for the random-d.uk API that hands back the url of a random
//! duck image. Failures (timeout, connection, bad payload) surface as
//! `DuckError::Upstream`.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::{DuckError, Result};

// == Quack Payload ==
/// The slice of the random-d.uk response we care about.
#[derive(Debug, Deserialize)]
struct QuackPayload {
    url: String,
}

// == Random Duck Client ==
/// HTTP client for the random duck image API.
#[derive(Debug, Clone)]
pub struct RandomDuckClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RandomDuckClient {
    /// Builds a client with the endpoint and request timeout from config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout))
            .build()
            .map_err(|e| DuckError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: config.random_duck_url.clone(),
        })
    }

    /// Fetches the url of a random duck image.
    pub async fn random_duck_url(&self) -> Result<String> {
        info!("Fetching random duck from {}", self.endpoint);

        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| {
                error!("Request to duck API failed: {}", e);
                DuckError::Upstream(format!("request to duck API failed: {e}"))
            })?
            .error_for_status()
            .map_err(|e| {
                error!("Duck API returned an error status: {}", e);
                DuckError::Upstream(format!("duck API returned an error status: {e}"))
            })?;

        let payload: QuackPayload = response.json().await.map_err(|e| {
            error!("Invalid response from duck API: {}", e);
            DuckError::Upstream(format!("invalid response from duck API: {e}"))
        })?;

        debug!("Received random duck: {}", payload.url);
        Ok(payload.url)
    }
}
