//! Ledger and price boundaries consumed by the scanner
//!
//! The scanner only reads chain state through [`LedgerGateway`] and prices
//! through [`PriceSource`]. Timeouts, retries and caching of ledger data are
//! the gateway's concern, not the engine's.

mod cache;
mod price;
mod rpc;

pub use cache::*;
pub use price::*;
pub use rpc::*;

use crate::error::AppResult;
use solana_sdk::pubkey::Pubkey;

/// Owner and raw data of an on-chain account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    /// Program that owns the account
    pub owner: Pubkey,
    /// Raw account data
    pub data: Vec<u8>,
}

/// Total supply of a mint in base units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSupply {
    /// Raw amount as a decimal string (may exceed f64 precision)
    pub amount: String,
    /// Mint decimals
    pub decimals: u8,
}

/// Balance of one of the largest token accounts for a mint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolderBalance {
    /// Raw amount as a decimal string
    pub amount: String,
}

/// One entry of an address's signature history, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureInfo {
    /// Base58 transaction signature
    pub signature: String,
    /// Block time in Unix seconds, if the node knows it
    pub block_time: Option<i64>,
}

/// Paging parameters for [`LedgerGateway::get_signature_history`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    /// Maximum number of signatures to return
    pub limit: usize,
    /// Only return signatures older than this one
    pub before: Option<String>,
}

/// Read-only chain queries
#[async_trait::async_trait]
pub trait LedgerGateway: Send + Sync {
    /// Fetch an account; `Ok(None)` when it does not exist
    async fn get_account_info(&self, pubkey: &Pubkey) -> AppResult<Option<AccountInfo>>;

    /// Fetch the total supply of a mint
    async fn get_token_supply(&self, mint: &Pubkey) -> AppResult<TokenSupply>;

    /// Fetch the largest token accounts of a mint, largest first
    async fn get_token_largest_accounts(&self, mint: &Pubkey) -> AppResult<Vec<HolderBalance>>;

    /// Fetch one page of signatures for an address, newest first
    async fn get_signature_history(
        &self,
        pubkey: &Pubkey,
        query: HistoryQuery,
    ) -> AppResult<Vec<SignatureInfo>>;
}

/// Best-effort USD price lookup
#[async_trait::async_trait]
pub trait PriceSource: Send + Sync {
    /// Current USD price, or `None` if unknown or the lookup failed
    async fn price_usd(&self, mint_address: &str) -> Option<f64>;
}

/// Price source that never knows a price
pub struct NoPrice;

#[async_trait::async_trait]
impl PriceSource for NoPrice {
    async fn price_usd(&self, _mint_address: &str) -> Option<f64> {
        None
    }
}
