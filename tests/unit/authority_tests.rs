//! Authority decoding over raw mint account bytes

use mint_risk_scanner::constants::programs;
use mint_risk_scanner::scanner::authority::{check_freeze_authority, check_mint_authority};
use mint_risk_scanner::scanner::layout::{MintLayout, MINT_LEN};
use mint_risk_scanner::scanner::snapshot::MintAccountSnapshot;
use mint_risk_scanner::LayoutError;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

fn snapshot(owner: &str, raw_bytes: Vec<u8>) -> MintAccountSnapshot {
    MintAccountSnapshot {
        owner: Pubkey::from_str(owner).unwrap(),
        raw_bytes,
    }
}

/// Hand-built mint bytes: tags as little-endian u32, keys right after
fn raw_mint(mint_authority: Option<Pubkey>, freeze_authority: Option<Pubkey>) -> Vec<u8> {
    let mut data = vec![0u8; MINT_LEN];
    if let Some(key) = mint_authority {
        data[0..4].copy_from_slice(&1u32.to_le_bytes());
        data[4..36].copy_from_slice(&key.to_bytes());
    }
    data[36..44].copy_from_slice(&5_000u64.to_le_bytes());
    data[44] = 9;
    data[45] = 1;
    if let Some(key) = freeze_authority {
        data[46..50].copy_from_slice(&1u32.to_le_bytes());
        data[50..82].copy_from_slice(&key.to_bytes());
    }
    data
}

#[test]
fn test_freeze_authority_read_from_its_own_slot() {
    let freeze = Pubkey::new_unique();
    let snap = snapshot(programs::TOKEN, raw_mint(None, Some(freeze)));

    let mint = check_mint_authority(Some(&snap));
    assert!(mint.safe);
    assert_eq!(mint.detail, "disabled");

    let result = check_freeze_authority(Some(&snap));
    assert!(!result.safe);
    assert_eq!(result.weight, 20);
    assert_eq!(
        result.detail,
        format!("freeze authority present: {}...", &freeze.to_string()[..8])
    );
}

#[test]
fn test_hand_built_bytes_match_layout_decoder() {
    let mint_key = Pubkey::new_unique();
    let freeze_key = Pubkey::new_unique();
    let layout = MintLayout::decode(&raw_mint(Some(mint_key), Some(freeze_key))).unwrap();

    assert_eq!(layout.mint_authority, Some(mint_key));
    assert_eq!(layout.freeze_authority, Some(freeze_key));
    assert_eq!(layout.supply, 5_000);
    assert_eq!(layout.decimals, 9);
    assert!(layout.is_initialized);
}

#[test]
fn test_short_account_data_fails_open() {
    let mut data = raw_mint(Some(Pubkey::new_unique()), None);
    data.truncate(60);
    let snap = snapshot(programs::TOKEN, data);

    for result in [check_mint_authority(Some(&snap)), check_freeze_authority(Some(&snap))] {
        assert!(result.safe);
        assert!(result.errored);
        assert_eq!(result.contribution(), 0);
    }

    assert_eq!(
        MintLayout::decode(&[0u8; 60]),
        Err(LayoutError::TooShort {
            expected: MINT_LEN,
            actual: 60
        })
    );
}

#[test]
fn test_garbage_option_tag_fails_open() {
    let mut data = raw_mint(None, None);
    data[0..4].copy_from_slice(&7u32.to_le_bytes());
    let snap = snapshot(programs::TOKEN, data);

    let result = check_mint_authority(Some(&snap));
    assert!(result.errored);
    assert_eq!(result.detail, "check unavailable");
}

#[test]
fn test_extended_program_never_decoded() {
    // bytes that would read as an active authority under the base layout
    let snap = snapshot(programs::TOKEN_2022, raw_mint(Some(Pubkey::new_unique()), None));

    let result = check_mint_authority(Some(&snap));
    assert!(result.safe);
    assert!(!result.errored);
    assert!(result.detail.contains("layout not fully parsed"));
}

#[test]
fn test_unknown_owner_decoded_as_base_layout() {
    let key = Pubkey::new_unique();
    let snap = MintAccountSnapshot {
        owner: Pubkey::new_unique(),
        raw_bytes: raw_mint(Some(key), None),
    };

    let result = check_mint_authority(Some(&snap));
    assert!(!result.safe);
    assert!(result.detail.starts_with("mint authority present: "));
}
