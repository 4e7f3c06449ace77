//! Reduce check results into a score and level

use super::types::{CheckResult, RiskLevel};

/// Highest score still rated LOW
pub const LOW_MAX_SCORE: u8 = 20;

/// Highest score still rated MEDIUM
pub const MEDIUM_MAX_SCORE: u8 = 50;

/// Sum of weights of non-errored unsafe checks, clamped to 0..=100
pub fn risk_score(checks: &[CheckResult]) -> u8 {
    let total: u32 = checks.iter().map(CheckResult::contribution).sum();
    total.min(100) as u8
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        if score <= LOW_MAX_SCORE {
            RiskLevel::Low
        } else if score <= MEDIUM_MAX_SCORE {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}
