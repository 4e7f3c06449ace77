//! RiskScanner - runs all checks for a mint and reduces them into a verdict
//!
//! Two fan-out/fan-in stages per scan:
//! 1. account snapshot, supply and price fetched concurrently
//! 2. the four checks run concurrently against stage-one data
//!
//! Nothing is shared between scans and nothing is retried; a failing check
//! fails open without affecting its siblings.

use super::age::check_token_age;
use super::authority::{check_freeze_authority, check_mint_authority};
use super::concentration::check_top_holders;
use super::score::risk_score;
use super::snapshot::fetch_snapshot;
use super::types::{RiskLevel, ScanResult, TokenInfo};
use crate::error::{AppError, AppResult};
use crate::gateway::{LedgerGateway, NoPrice, PriceSource, TokenSupply};
use crate::metrics::ScanMetrics;
use chrono::Utc;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

/// Token risk scoring engine
pub struct RiskScanner {
    gateway: Arc<dyn LedgerGateway>,
    price_source: Arc<dyn PriceSource>,
    metrics: Option<Arc<ScanMetrics>>,
}

impl RiskScanner {
    /// Create a scanner without price lookups or metrics
    pub fn new(gateway: Arc<dyn LedgerGateway>) -> Self {
        Self {
            gateway,
            price_source: Arc::new(NoPrice),
            metrics: None,
        }
    }

    /// Use `price_source` for `TokenInfo.price_usd`
    pub fn with_price_source(mut self, price_source: Arc<dyn PriceSource>) -> Self {
        self.price_source = price_source;
        self
    }

    /// Record every scan into `metrics`
    pub fn with_metrics(mut self, metrics: Arc<ScanMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Scan a mint
    ///
    /// Fails only when `mint_address` is not a valid public key; that is
    /// checked before any network call. Every other failure is folded into
    /// the returned result.
    pub async fn scan(&self, mint_address: &str) -> AppResult<ScanResult> {
        let mint = parse_mint(mint_address)?;
        let started = Instant::now();
        let gateway = self.gateway.as_ref();

        let (snapshot, supply, price_usd) = tokio::join!(
            fetch_snapshot(gateway, &mint),
            self.fetch_supply(&mint),
            self.price_source.price_usd(mint_address),
        );

        let (mint_authority, freeze_authority, top_holders, token_age) = tokio::join!(
            async { check_mint_authority(snapshot.as_ref()) },
            async { check_freeze_authority(snapshot.as_ref()) },
            check_top_holders(gateway, &mint, supply.as_ref()),
            check_token_age(gateway, &mint, Utc::now()),
        );

        let checks = vec![mint_authority, freeze_authority, top_holders, token_age];
        let score = risk_score(&checks);
        let level = RiskLevel::from_score(score);

        for check in &checks {
            tracing::debug!(
                mint = mint_address,
                check = %check.name,
                safe = check.safe,
                errored = check.errored,
                detail = %check.detail,
                "Check completed"
            );
        }

        let result = ScanResult {
            mint_address: mint_address.to_string(),
            risk_score: score,
            risk_level: level,
            checks,
            token_info: TokenInfo {
                supply: supply.as_ref().map(|s| s.amount.clone()),
                decimals: supply.as_ref().map(|s| s.decimals),
                price_usd,
            },
            scanned_at: Utc::now(),
        };

        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        if let Some(ref metrics) = self.metrics {
            metrics.observe(&result, elapsed_ms);
        }

        tracing::info!(
            mint = mint_address,
            risk_score = score,
            risk_level = %level,
            elapsed_ms = elapsed_ms,
            "Scan completed"
        );

        Ok(result)
    }

    async fn fetch_supply(&self, mint: &Pubkey) -> Option<TokenSupply> {
        match self.gateway.get_token_supply(mint).await {
            Ok(supply) => Some(supply),
            Err(e) => {
                tracing::warn!(mint = %mint, error = %e, "Failed to fetch token supply");
                None
            }
        }
    }
}

/// Validate a base58 mint address
pub fn parse_mint(mint_address: &str) -> AppResult<Pubkey> {
    Pubkey::from_str(mint_address)
        .map_err(|e| AppError::Validation(format!("Invalid mint address {:?}: {}", mint_address, e)))
}
