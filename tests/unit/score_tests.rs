//! Score aggregation and level mapping

use mint_risk_scanner::scanner::score::{risk_score, LOW_MAX_SCORE, MEDIUM_MAX_SCORE};
use mint_risk_scanner::{CheckName, CheckResult, RiskLevel};

fn checks(risky: &[CheckName], errored: &[CheckName]) -> Vec<CheckResult> {
    CheckName::ALL
        .iter()
        .map(|name| {
            if errored.contains(name) {
                CheckResult::unavailable(*name)
            } else if risky.contains(name) {
                CheckResult::risky(*name, "risky")
            } else {
                CheckResult::safe(*name, "ok")
            }
        })
        .collect()
}

#[test]
fn test_weights() {
    assert_eq!(CheckName::MintAuthority.weight(), 30);
    assert_eq!(CheckName::FreezeAuthority.weight(), 20);
    assert_eq!(CheckName::TopHolders.weight(), 20);
    assert_eq!(CheckName::TokenAge.weight(), 10);
}

#[test]
fn test_every_combination_sums_unsafe_weights() {
    for mask in 0u8..16 {
        let risky: Vec<CheckName> = CheckName::ALL
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, n)| *n)
            .collect();
        let expected: u32 = risky.iter().map(|n| n.weight() as u32).sum();

        let score = risk_score(&checks(&risky, &[]));
        assert_eq!(score as u32, expected, "mask {:04b}", mask);
        assert!(score <= 100);
    }
}

#[test]
fn test_errored_checks_contribute_nothing() {
    let all = CheckName::ALL;
    let score = risk_score(&checks(&all, &[CheckName::MintAuthority, CheckName::TopHolders]));
    assert_eq!(score, 20 + 10);
}

#[test]
fn test_common_scenarios() {
    // freeze authority only
    let score = risk_score(&checks(&[CheckName::FreezeAuthority], &[]));
    assert_eq!((score, RiskLevel::from_score(score)), (20, RiskLevel::Low));

    // mint authority only
    let score = risk_score(&checks(&[CheckName::MintAuthority], &[]));
    assert_eq!((score, RiskLevel::from_score(score)), (30, RiskLevel::Medium));

    // both authorities
    let score = risk_score(&checks(
        &[CheckName::MintAuthority, CheckName::FreezeAuthority],
        &[],
    ));
    assert_eq!((score, RiskLevel::from_score(score)), (50, RiskLevel::Medium));

    // both authorities and a young token
    let score = risk_score(&checks(
        &[CheckName::MintAuthority, CheckName::FreezeAuthority, CheckName::TokenAge],
        &[],
    ));
    assert_eq!((score, RiskLevel::from_score(score)), (60, RiskLevel::High));
}

#[test]
fn test_level_thresholds() {
    for score in 0..=100u8 {
        let expected = if score <= LOW_MAX_SCORE {
            RiskLevel::Low
        } else if score <= MEDIUM_MAX_SCORE {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        };
        assert_eq!(RiskLevel::from_score(score), expected);
    }
}

#[test]
fn test_level_display() {
    assert_eq!(RiskLevel::Low.to_string(), "LOW");
    assert_eq!(RiskLevel::Medium.to_string(), "MEDIUM");
    assert_eq!(RiskLevel::High.to_string(), "HIGH");
}
