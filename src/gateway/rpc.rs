//! Ledger gateway backed by the Solana JSON-RPC client

use super::{AccountInfo, HistoryQuery, HolderBalance, LedgerGateway, SignatureInfo, TokenSupply};
use crate::config::RpcConfig;
use crate::error::{AppError, AppResult};
use solana_client::rpc_client::{GetConfirmedSignaturesForAddress2Config, RpcClient};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// [`LedgerGateway`] over a blocking [`RpcClient`]
///
/// Each call runs on the blocking pool so the async scan stays responsive.
pub struct RpcLedgerGateway {
    rpc_client: Arc<RpcClient>,
}

impl RpcLedgerGateway {
    /// Create a gateway from RPC configuration
    pub fn new(config: &RpcConfig) -> Self {
        let commitment = CommitmentConfig::from_str(&config.commitment)
            .unwrap_or_else(|_| CommitmentConfig::confirmed());
        let rpc_client = RpcClient::new_with_timeout_and_commitment(
            config.url.clone(),
            Duration::from_millis(config.timeout_ms),
            commitment,
        );

        Self {
            rpc_client: Arc::new(rpc_client),
        }
    }

    /// Create from an existing RPC client
    pub fn with_client(rpc_client: Arc<RpcClient>) -> Self {
        Self { rpc_client }
    }

    async fn blocking<T, F>(&self, op: &'static str, f: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&RpcClient) -> AppResult<T> + Send + 'static,
    {
        let rpc_client = self.rpc_client.clone();
        tokio::task::spawn_blocking(move || f(&rpc_client))
            .await
            .map_err(|e| AppError::Internal(format!("{} task join error: {}", op, e)))?
    }
}

#[async_trait::async_trait]
impl LedgerGateway for RpcLedgerGateway {
    async fn get_account_info(&self, pubkey: &Pubkey) -> AppResult<Option<AccountInfo>> {
        let pubkey = *pubkey;
        self.blocking("getAccountInfo", move |rpc| {
            let response = rpc
                .get_account_with_commitment(&pubkey, rpc.commitment())
                .map_err(|e| AppError::Rpc(format!("Failed to get account: {}", e)))?;

            Ok(response.value.map(|account| AccountInfo {
                owner: account.owner,
                data: account.data,
            }))
        })
        .await
    }

    async fn get_token_supply(&self, mint: &Pubkey) -> AppResult<TokenSupply> {
        let mint = *mint;
        self.blocking("getTokenSupply", move |rpc| {
            let supply = rpc
                .get_token_supply(&mint)
                .map_err(|e| AppError::Rpc(format!("Failed to get token supply: {}", e)))?;

            Ok(TokenSupply {
                amount: supply.amount,
                decimals: supply.decimals,
            })
        })
        .await
    }

    async fn get_token_largest_accounts(&self, mint: &Pubkey) -> AppResult<Vec<HolderBalance>> {
        let mint = *mint;
        self.blocking("getTokenLargestAccounts", move |rpc| {
            let accounts = rpc.get_token_largest_accounts(&mint).map_err(|e| {
                AppError::Rpc(format!("Failed to get largest accounts: {}", e))
            })?;

            Ok(accounts
                .into_iter()
                .map(|balance| HolderBalance {
                    amount: balance.amount.amount,
                })
                .collect())
        })
        .await
    }

    async fn get_signature_history(
        &self,
        pubkey: &Pubkey,
        query: HistoryQuery,
    ) -> AppResult<Vec<SignatureInfo>> {
        let pubkey = *pubkey;
        let before = query
            .before
            .as_deref()
            .map(Signature::from_str)
            .transpose()
            .map_err(|e| AppError::Parse(format!("Invalid signature cursor: {}", e)))?;

        self.blocking("getSignaturesForAddress", move |rpc| {
            let config = GetConfirmedSignaturesForAddress2Config {
                before,
                until: None,
                limit: Some(query.limit),
                commitment: Some(rpc.commitment()),
            };

            let signatures = rpc
                .get_signatures_for_address_with_config(&pubkey, config)
                .map_err(|e| AppError::Rpc(format!("Failed to get signatures: {}", e)))?;

            Ok(signatures
                .into_iter()
                .map(|status| SignatureInfo {
                    signature: status.signature,
                    block_time: status.block_time,
                })
                .collect())
        })
        .await
    }
}
