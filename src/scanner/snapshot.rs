//! One-shot fetch of the mint account, shared by the authority checks

use crate::gateway::LedgerGateway;
use solana_sdk::pubkey::Pubkey;

/// Owner and raw bytes of the mint account as seen at the start of a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintAccountSnapshot {
    pub owner: Pubkey,
    pub raw_bytes: Vec<u8>,
}

/// Fetch the mint account once
///
/// Returns `None` both when the account does not exist and when the fetch
/// failed; callers cannot tell the two apart.
pub async fn fetch_snapshot(
    gateway: &dyn LedgerGateway,
    mint: &Pubkey,
) -> Option<MintAccountSnapshot> {
    match gateway.get_account_info(mint).await {
        Ok(Some(account)) => Some(MintAccountSnapshot {
            owner: account.owner,
            raw_bytes: account.data,
        }),
        Ok(None) => {
            tracing::debug!(mint = %mint, "Mint account not found");
            None
        }
        Err(e) => {
            tracing::warn!(
                mint = %mint,
                error = %e,
                "Failed to fetch mint account, treating as absent"
            );
            None
        }
    }
}
