//! Configuration management for the mint risk scanner
//!
//! Loads configuration from YAML files and environment variables.
//! Environment variables override YAML values.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::endpoints;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// RPC endpoint configuration
    #[serde(default)]
    pub rpc: RpcConfig,
    /// Price lookup configuration
    #[serde(default)]
    pub price: PriceConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// RPC endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RpcConfig {
    /// JSON-RPC endpoint URL
    #[serde(default = "default_rpc_url")]
    pub url: String,
    /// Request timeout in milliseconds
    #[serde(default = "default_rpc_timeout")]
    pub timeout_ms: u64,
    /// Commitment level: processed, confirmed or finalized
    #[serde(default = "default_commitment")]
    pub commitment: String,
}

fn default_rpc_url() -> String {
    endpoints::MAINNET_RPC.to_string()
}

fn default_rpc_timeout() -> u64 {
    10_000
}

fn default_commitment() -> String {
    "confirmed".to_string()
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: default_rpc_url(),
            timeout_ms: default_rpc_timeout(),
            commitment: default_commitment(),
        }
    }
}

/// Longest accepted price cache TTL (one day)
pub const MAX_PRICE_CACHE_TTL_SECONDS: i64 = 86_400;

/// Price lookup configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PriceConfig {
    /// Whether to look up USD prices at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Jupiter price API base URL
    #[serde(default = "default_price_api_url")]
    pub api_url: String,
    /// Request timeout in milliseconds
    #[serde(default = "default_price_timeout")]
    pub timeout_ms: u64,
    /// Price cache capacity
    #[serde(default = "default_price_cache_capacity")]
    pub cache_capacity: usize,
    /// Price cache TTL in seconds
    #[serde(default = "default_price_cache_ttl")]
    pub cache_ttl_seconds: i64,
}

fn default_true() -> bool {
    true
}

fn default_price_api_url() -> String {
    endpoints::JUPITER_PRICE.to_string()
}

fn default_price_timeout() -> u64 {
    3_000
}

fn default_price_cache_capacity() -> usize {
    1000
}

fn default_price_cache_ttl() -> i64 {
    30
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: default_price_api_url(),
            timeout_ms: default_price_timeout(),
            cache_capacity: default_price_cache_capacity(),
            cache_ttl_seconds: default_price_cache_ttl(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
    /// EnvFilter directive overriding the default (RUST_LOG still wins)
    #[serde(default)]
    pub filter: Option<String>,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SCANNER_*)
    /// 2. config/config.yaml (if exists)
    /// 3. config.yaml (if exists)
    /// 4. Default values
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("rpc.url", endpoints::MAINNET_RPC)?
            .set_default("rpc.timeout_ms", 10_000)?
            .set_default("rpc.commitment", "confirmed")?
            .set_default("price.enabled", true)?
            .set_default("price.api_url", endpoints::JUPITER_PRICE)?
            .set_default("price.timeout_ms", 3_000)?
            .set_default("logging.json", false)?
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name("config/config").required(false))
            // SCANNER_RPC__URL=https://... -> rpc.url
            .add_source(
                Environment::with_prefix("SCANNER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rpc.url.is_empty() {
            return Err(ConfigError::Message("RPC URL must be set".to_string()));
        }

        if self.rpc.timeout_ms == 0 {
            return Err(ConfigError::Message(
                "RPC timeout must be greater than zero".to_string(),
            ));
        }

        if !matches!(
            self.rpc.commitment.as_str(),
            "processed" | "confirmed" | "finalized"
        ) {
            return Err(ConfigError::Message(format!(
                "Unknown commitment level: {}",
                self.rpc.commitment
            )));
        }

        if self.price.enabled {
            if self.price.api_url.is_empty() {
                return Err(ConfigError::Message(
                    "Price API URL must be set when price lookups are enabled".to_string(),
                ));
            }
            if self.price.timeout_ms == 0 {
                return Err(ConfigError::Message(
                    "Price timeout must be greater than zero".to_string(),
                ));
            }
            if self.price.cache_capacity == 0 {
                return Err(ConfigError::Message(
                    "Price cache capacity must be greater than zero".to_string(),
                ));
            }
            if !(0..=MAX_PRICE_CACHE_TTL_SECONDS).contains(&self.price.cache_ttl_seconds) {
                return Err(ConfigError::Message(format!(
                    "Price cache TTL must be between 0 and {} seconds, got {}",
                    MAX_PRICE_CACHE_TTL_SECONDS, self.price.cache_ttl_seconds
                )));
            }
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rpc: RpcConfig::default(),
            price: PriceConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
