//! Base SPL Token `Mint` account layout
//!
//! ```text
//! offset  len  field
//!      0    4  mint_authority option tag (u32 LE, 0 = none, 1 = some)
//!      4   32  mint_authority pubkey
//!     36    8  supply (u64 LE)
//!     44    1  decimals
//!     45    1  is_initialized
//!     46    4  freeze_authority option tag (u32 LE)
//!     50   32  freeze_authority pubkey
//! ```
//!
//! Token-2022 mints share this prefix but append extensions; they are not
//! decoded here.

use crate::error::LayoutError;
use solana_sdk::pubkey::Pubkey;
use std::ops::Range;

/// Size of a base mint account
pub const MINT_LEN: usize = 82;

const OPTION_TAG_LEN: usize = 4;
const PUBKEY_LEN: usize = 32;

const MINT_AUTHORITY_OFFSET: usize = 0;
const SUPPLY: Range<usize> = 36..44;
const DECIMALS: usize = 44;
const IS_INITIALIZED: usize = 45;
const FREEZE_AUTHORITY_OFFSET: usize = 46;

/// Decoded base mint account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintLayout {
    pub mint_authority: Option<Pubkey>,
    pub supply: u64,
    pub decimals: u8,
    pub is_initialized: bool,
    pub freeze_authority: Option<Pubkey>,
}

impl MintLayout {
    /// Decode a mint account buffer; trailing bytes beyond [`MINT_LEN`] are ignored
    pub fn decode(data: &[u8]) -> Result<Self, LayoutError> {
        if data.len() < MINT_LEN {
            return Err(LayoutError::TooShort {
                expected: MINT_LEN,
                actual: data.len(),
            });
        }

        let mut supply = [0u8; 8];
        supply.copy_from_slice(&data[SUPPLY]);

        Ok(Self {
            mint_authority: read_option_pubkey(data, MINT_AUTHORITY_OFFSET, "mint_authority")?,
            supply: u64::from_le_bytes(supply),
            decimals: data[DECIMALS],
            is_initialized: data[IS_INITIALIZED] != 0,
            freeze_authority: read_option_pubkey(
                data,
                FREEZE_AUTHORITY_OFFSET,
                "freeze_authority",
            )?,
        })
    }

    /// Encode back into the fixed layout
    pub fn encode(&self) -> [u8; MINT_LEN] {
        let mut data = [0u8; MINT_LEN];
        write_option_pubkey(&mut data, MINT_AUTHORITY_OFFSET, self.mint_authority.as_ref());
        data[SUPPLY].copy_from_slice(&self.supply.to_le_bytes());
        data[DECIMALS] = self.decimals;
        data[IS_INITIALIZED] = u8::from(self.is_initialized);
        write_option_pubkey(&mut data, FREEZE_AUTHORITY_OFFSET, self.freeze_authority.as_ref());
        data
    }
}

/// Caller guarantees `data.len() >= offset + 36`
fn read_option_pubkey(
    data: &[u8],
    offset: usize,
    field: &'static str,
) -> Result<Option<Pubkey>, LayoutError> {
    let mut tag = [0u8; OPTION_TAG_LEN];
    tag.copy_from_slice(&data[offset..offset + OPTION_TAG_LEN]);

    match u32::from_le_bytes(tag) {
        0 => Ok(None),
        1 => {
            let start = offset + OPTION_TAG_LEN;
            let mut key = [0u8; PUBKEY_LEN];
            key.copy_from_slice(&data[start..start + PUBKEY_LEN]);
            Ok(Some(Pubkey::new_from_array(key)))
        }
        tag => Err(LayoutError::InvalidOptionTag { field, tag }),
    }
}

fn write_option_pubkey(data: &mut [u8], offset: usize, key: Option<&Pubkey>) {
    if let Some(key) = key {
        data[offset..offset + OPTION_TAG_LEN].copy_from_slice(&1u32.to_le_bytes());
        let start = offset + OPTION_TAG_LEN;
        data[start..start + PUBKEY_LEN].copy_from_slice(&key.to_bytes());
    }
}
