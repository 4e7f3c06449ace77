//! Top-10 holder concentration
//!
//! Share is computed in per-mille with integer arithmetic; supply values can
//! exceed what an f64 represents exactly. The percentage is display-only.

use super::types::{CheckName, CheckResult};
use crate::error::{AppError, AppResult};
use crate::gateway::{HolderBalance, LedgerGateway, TokenSupply};
use rust_decimal::prelude::*;
use solana_sdk::pubkey::Pubkey;

/// Number of largest holders summed
pub const TOP_HOLDER_COUNT: usize = 10;

/// Above this per-mille share the supply is extremely concentrated (80%)
pub const EXTREME_CONCENTRATION_PER_MILLE: u128 = 800;

/// Above this per-mille share the supply is highly concentrated (50%)
pub const HIGH_CONCENTRATION_PER_MILLE: u128 = 500;

/// Top-holder share of supply
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Concentration {
    /// Share in tenths of a percent, truncated
    pub per_mille: u128,
    /// `per_mille / 10`, for display
    pub percent: f64,
}

impl Concentration {
    /// Compute the share of `total_supply` held by `top_sum`
    ///
    /// `total_supply` must be non-zero.
    pub fn from_amounts(top_sum: u128, total_supply: u128) -> AppResult<Self> {
        if total_supply == 0 {
            return Err(AppError::Parse("total supply is zero".to_string()));
        }

        let per_mille = top_sum
            .checked_mul(1000)
            .ok_or_else(|| AppError::Parse("holder sum overflows".to_string()))?
            / total_supply;

        let percent = i128::try_from(per_mille)
            .ok()
            .and_then(|pm| Decimal::try_from_i128_with_scale(pm, 1).ok())
            .and_then(|d| d.to_f64())
            .ok_or_else(|| AppError::Parse(format!("share out of range: {}", per_mille)))?;

        Ok(Self { per_mille, percent })
    }
}

/// Evaluate whale-dump risk for `mint`
///
/// `known_supply` is the supply already fetched by the caller; it is only
/// re-fetched when the caller does not have it.
pub async fn check_top_holders(
    gateway: &dyn LedgerGateway,
    mint: &Pubkey,
    known_supply: Option<&TokenSupply>,
) -> CheckResult {
    match evaluate(gateway, mint, known_supply).await {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(mint = %mint, error = %e, "Top holders check unavailable");
            CheckResult::unavailable(CheckName::TopHolders)
        }
    }
}

async fn evaluate(
    gateway: &dyn LedgerGateway,
    mint: &Pubkey,
    known_supply: Option<&TokenSupply>,
) -> AppResult<CheckResult> {
    let holders = gateway.get_token_largest_accounts(mint).await?;
    if holders.is_empty() {
        return Ok(CheckResult::risky(CheckName::TopHolders, "no holders found"));
    }

    let total_supply = match known_supply {
        Some(supply) => parse_amount(&supply.amount)?,
        None => parse_amount(&gateway.get_token_supply(mint).await?.amount)?,
    };
    if total_supply == 0 {
        return Ok(CheckResult::risky(CheckName::TopHolders, "zero supply"));
    }

    let top_sum = sum_top_holders(&holders)?;
    let share = Concentration::from_amounts(top_sum, total_supply)?;

    tracing::debug!(
        mint = %mint,
        holders = holders.len(),
        per_mille = %share.per_mille,
        "Computed top holder concentration"
    );

    Ok(classify(&share))
}

/// Map a share onto the check result
pub fn classify(share: &Concentration) -> CheckResult {
    if share.per_mille > EXTREME_CONCENTRATION_PER_MILLE {
        CheckResult::risky(
            CheckName::TopHolders,
            format!("extreme concentration: top 10 hold {:.1}%", share.percent),
        )
    } else if share.per_mille > HIGH_CONCENTRATION_PER_MILLE {
        CheckResult::risky(
            CheckName::TopHolders,
            format!("high concentration: top 10 hold {:.1}%", share.percent),
        )
    } else {
        CheckResult::safe(
            CheckName::TopHolders,
            format!("top 10 hold {:.1}%", share.percent),
        )
    }
}

/// Sum the largest [`TOP_HOLDER_COUNT`] balances
fn sum_top_holders(holders: &[HolderBalance]) -> AppResult<u128> {
    let mut amounts = holders
        .iter()
        .map(|h| parse_amount(&h.amount))
        .collect::<AppResult<Vec<u128>>>()?;
    amounts.sort_unstable_by(|a, b| b.cmp(a));

    amounts
        .into_iter()
        .take(TOP_HOLDER_COUNT)
        .try_fold(0u128, |acc, amount| acc.checked_add(amount))
        .ok_or_else(|| AppError::Parse("holder sum overflows".to_string()))
}

/// Parse a raw base-unit amount string
pub fn parse_amount(amount: &str) -> AppResult<u128> {
    amount
        .trim()
        .parse::<u128>()
        .map_err(|e| AppError::Parse(format!("invalid token amount {:?}: {}", amount, e)))
}
