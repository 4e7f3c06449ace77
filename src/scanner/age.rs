//! Token age estimate from the mint's signature history
//!
//! Walks history newest-first, at most [`MAX_HISTORY_PAGES`] pages of
//! [`HISTORY_PAGE_SIZE`]. A mint with more than 5000 signatures since
//! creation is reported younger than it is: the oldest visible signature is
//! not the creation transaction. The cap stays; it bounds RPC cost per scan.

use super::types::{CheckName, CheckResult};
use crate::error::AppResult;
use crate::gateway::{HistoryQuery, LedgerGateway};
use chrono::{DateTime, Duration, Utc};
use solana_sdk::pubkey::Pubkey;

/// Signatures requested per page (RPC maximum)
pub const HISTORY_PAGE_SIZE: usize = 1000;

/// Pages walked before giving up
pub const MAX_HISTORY_PAGES: usize = 5;

/// Estimate how long `mint` has existed, relative to `now`
pub async fn check_token_age(
    gateway: &dyn LedgerGateway,
    mint: &Pubkey,
    now: DateTime<Utc>,
) -> CheckResult {
    match oldest_block_time(gateway, mint).await {
        Ok(Some(oldest)) => classify_age(now.timestamp() - oldest),
        Ok(None) => CheckResult::risky(CheckName::TokenAge, "unknown age"),
        Err(e) => {
            tracing::warn!(mint = %mint, error = %e, "Token age check unavailable");
            CheckResult::unavailable(CheckName::TokenAge)
        }
    }
}

/// Oldest block time among the visible signatures, `None` if there are none
pub async fn oldest_block_time(gateway: &dyn LedgerGateway, mint: &Pubkey) -> AppResult<Option<i64>> {
    let mut oldest: Option<i64> = None;
    let mut before: Option<String> = None;

    for page in 0..MAX_HISTORY_PAGES {
        let signatures = gateway
            .get_signature_history(
                mint,
                HistoryQuery {
                    limit: HISTORY_PAGE_SIZE,
                    before: before.take(),
                },
            )
            .await?;

        if let Some(page_oldest) = signatures.iter().filter_map(|s| s.block_time).min() {
            oldest = Some(oldest.map_or(page_oldest, |o| o.min(page_oldest)));
        }

        tracing::trace!(mint = %mint, page, count = signatures.len(), "Signature page fetched");

        if signatures.len() < HISTORY_PAGE_SIZE {
            break;
        }
        before = signatures.last().map(|s| s.signature.clone());
    }

    Ok(oldest)
}

/// Map an age in seconds onto the check result
pub fn classify_age(age_secs: i64) -> CheckResult {
    let age = Duration::seconds(age_secs.max(0));

    if age < Duration::hours(24) {
        CheckResult::risky(
            CheckName::TokenAge,
            format!("very new: {}h old", age.num_hours()),
        )
    } else if age < Duration::days(7) {
        CheckResult::risky(CheckName::TokenAge, format!("new: {}d old", age.num_days()))
    } else if age < Duration::days(30) {
        CheckResult::safe(CheckName::TokenAge, format!("{} days old", age.num_days()))
    } else if age < Duration::days(365) {
        let months = age.num_days() / 30;
        let unit = if months == 1 { "month" } else { "months" };
        CheckResult::safe(CheckName::TokenAge, format!("{} {} old", months, unit))
    } else {
        let years = age.num_days() as f64 / 365.0;
        CheckResult::safe(CheckName::TokenAge, format!("{:.1} years old", years))
    }
}
