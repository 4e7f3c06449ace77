//! Mint Risk Scanner Library
//!
//! Inspects a Solana token mint and produces a safety verdict:
//! authority status, holder concentration and token age, reduced into a
//! 0-100 risk score.

pub mod config;
pub mod constants;
pub mod error;
pub mod gateway;
pub mod metrics;
pub mod scanner;
pub mod telemetry;

pub use config::AppConfig;
pub use error::{AppError, AppResult, LayoutError};
pub use gateway::{
    CachedPriceSource, JupiterPriceSource, LedgerGateway, PriceSource, RpcLedgerGateway,
};
pub use metrics::ScanMetrics;
pub use scanner::{CheckName, CheckResult, RiskLevel, RiskScanner, ScanResult, TokenInfo};
