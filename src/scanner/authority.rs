//! Mint and freeze authority checks
//!
//! - Absent account: unsafe at full weight
//! - Token-2022 owner: safe with a "layout not fully parsed" caveat
//! - Authority present: unsafe, detail carries the key prefix
//! - Authority disabled: safe
//! - Undecodable data: fail open

use super::layout::MintLayout;
use super::snapshot::MintAccountSnapshot;
use super::types::{CheckName, CheckResult};
use crate::constants::programs;
use crate::error::LayoutError;
use solana_sdk::pubkey::Pubkey;

/// Detail for an extended-token mint; this is a blind spot, not a guarantee
pub const EXTENDED_LAYOUT_CAVEAT: &str =
    "Token-2022 mint: layout not fully parsed, authority not verified";

/// Characters of the authority key shown in the detail
const KEY_PREFIX_LEN: usize = 8;

#[derive(Clone, Copy)]
enum Authority {
    Mint,
    Freeze,
}

impl Authority {
    fn check_name(self) -> CheckName {
        match self {
            Authority::Mint => CheckName::MintAuthority,
            Authority::Freeze => CheckName::FreezeAuthority,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Authority::Mint => "mint authority",
            Authority::Freeze => "freeze authority",
        }
    }

    fn select(self, layout: &MintLayout) -> Option<Pubkey> {
        match self {
            Authority::Mint => layout.mint_authority,
            Authority::Freeze => layout.freeze_authority,
        }
    }
}

/// Can anyone still mint new units?
pub fn check_mint_authority(snapshot: Option<&MintAccountSnapshot>) -> CheckResult {
    check_authority(snapshot, Authority::Mint)
}

/// Can anyone still freeze holder accounts?
pub fn check_freeze_authority(snapshot: Option<&MintAccountSnapshot>) -> CheckResult {
    check_authority(snapshot, Authority::Freeze)
}

fn check_authority(snapshot: Option<&MintAccountSnapshot>, authority: Authority) -> CheckResult {
    let name = authority.check_name();

    let Some(snapshot) = snapshot else {
        return CheckResult::risky(name, "account not found");
    };

    if is_extended_token_program(&snapshot.owner) {
        return CheckResult::safe(name, EXTENDED_LAYOUT_CAVEAT);
    }

    match decode_authority(&snapshot.raw_bytes, authority) {
        Ok(Some(key)) => {
            let key = key.to_string();
            let prefix: String = key.chars().take(KEY_PREFIX_LEN).collect();
            CheckResult::risky(name, format!("{} present: {}...", authority.label(), prefix))
        }
        Ok(None) => CheckResult::safe(name, "disabled"),
        Err(e) => {
            tracing::warn!(
                check = %name,
                owner = %snapshot.owner,
                error = %e,
                "Failed to decode mint account"
            );
            CheckResult::unavailable(name)
        }
    }
}

fn decode_authority(data: &[u8], authority: Authority) -> Result<Option<Pubkey>, LayoutError> {
    MintLayout::decode(data).map(|layout| authority.select(&layout))
}

fn is_extended_token_program(owner: &Pubkey) -> bool {
    *owner == programs::TOKEN_2022_ID
}
