//! USD price lookups via the Jupiter price API

use super::PriceSource;
use crate::config::PriceConfig;
use crate::error::{AppError, AppResult};
use reqwest::Client;
use std::time::Duration;

/// [`PriceSource`] backed by Jupiter's price endpoint
pub struct JupiterPriceSource {
    client: Client,
    api_url: String,
}

impl JupiterPriceSource {
    /// Create a price source from configuration
    pub fn new(config: &PriceConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AppError::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_price(&self, mint_address: &str) -> AppResult<f64> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("ids", mint_address)])
            .send()
            .await
            .map_err(|e| AppError::Http(format!("Jupiter price request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Http(format!(
                "Jupiter API returned error: {}",
                response.status()
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::Parse(format!("Failed to parse Jupiter response: {}", e)))?;

        extract_price(&body, mint_address)
    }
}

#[async_trait::async_trait]
impl PriceSource for JupiterPriceSource {
    async fn price_usd(&self, mint_address: &str) -> Option<f64> {
        match self.fetch_price(mint_address).await {
            Ok(price) => Some(price),
            Err(e) => {
                tracing::debug!(mint = mint_address, error = %e, "Price lookup failed");
                None
            }
        }
    }
}

/// Read `data.{mint}.price`, which newer API versions send as a string
fn extract_price(body: &serde_json::Value, mint_address: &str) -> AppResult<f64> {
    let entry = body
        .get("data")
        .and_then(|d| d.get(mint_address))
        .filter(|entry| !entry.is_null())
        .ok_or_else(|| AppError::Parse("Token not found in Jupiter response".to_string()))?;

    let price = entry
        .get("price")
        .ok_or_else(|| AppError::Parse("No price found in Jupiter response".to_string()))?;

    let value = match price {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.parse::<f64>().ok(),
        _ => None,
    };

    value
        .filter(|p| p.is_finite())
        .ok_or_else(|| AppError::Parse(format!("Unreadable price value: {}", price)))
}
