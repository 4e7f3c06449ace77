//! Result records returned by a scan

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Detail attached to every check that failed for infrastructure reasons
pub const CHECK_UNAVAILABLE: &str = "check unavailable";

/// The four checks, in the order they appear in a [`ScanResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckName {
    MintAuthority,
    FreezeAuthority,
    TopHolders,
    TokenAge,
}

impl CheckName {
    /// Fixed report order
    pub const ALL: [CheckName; 4] = [
        CheckName::MintAuthority,
        CheckName::FreezeAuthority,
        CheckName::TopHolders,
        CheckName::TokenAge,
    ];

    /// Score contribution when the check is unsafe
    pub fn weight(&self) -> u8 {
        match self {
            CheckName::MintAuthority => 30,
            CheckName::FreezeAuthority => 20,
            CheckName::TopHolders => 20,
            CheckName::TokenAge => 10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckName::MintAuthority => "MintAuthority",
            CheckName::FreezeAuthority => "FreezeAuthority",
            CheckName::TopHolders => "TopHolders",
            CheckName::TokenAge => "TokenAge",
        }
    }
}

impl std::fmt::Display for CheckName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single check
///
/// An `errored` result never contributes to the score, whatever `safe` says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: CheckName,
    pub safe: bool,
    pub detail: String,
    pub weight: u8,
    pub errored: bool,
}

impl CheckResult {
    /// A check that found nothing risky
    pub fn safe(name: CheckName, detail: impl Into<String>) -> Self {
        Self {
            name,
            safe: true,
            detail: detail.into(),
            weight: name.weight(),
            errored: false,
        }
    }

    /// A check that found risk; carries the check's full weight
    pub fn risky(name: CheckName, detail: impl Into<String>) -> Self {
        Self {
            name,
            safe: false,
            detail: detail.into(),
            weight: name.weight(),
            errored: false,
        }
    }

    /// A check that could not be evaluated (fail-open)
    pub fn unavailable(name: CheckName) -> Self {
        Self {
            name,
            safe: true,
            detail: CHECK_UNAVAILABLE.to_string(),
            weight: name.weight(),
            errored: true,
        }
    }

    /// Points this result adds to the risk score
    pub fn contribution(&self) -> u32 {
        if self.errored || self.safe {
            0
        } else {
            u32::from(self.weight)
        }
    }
}

/// Severity bucket for a risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
        }
    }
}

/// Supply, decimals and price; each independently optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    /// Raw supply in base units as a decimal string
    pub supply: Option<String>,
    pub decimals: Option<u8>,
    pub price_usd: Option<f64>,
}

/// Complete verdict for one mint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub mint_address: String,
    /// 0..=100
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    /// Always in [`CheckName::ALL`] order
    pub checks: Vec<CheckResult>,
    pub token_info: TokenInfo,
    pub scanned_at: DateTime<Utc>,
}
