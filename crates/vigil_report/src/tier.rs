use serde::{Deserialize, Serialize};

/// Fusion probabilities below this are low risk.
pub const MODERATE_THRESHOLD: f64 = 0.3;
/// Fusion probabilities at or above this are high risk.
pub const HIGH_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Tier for a fusion probability. Thresholds belong to the upper tier,
    /// so 0.30 is already Moderate and 0.60 is already High. Anything the
    /// comparisons cannot place (NaN) lands in High rather than Low.
    pub fn from_probability(p: f64) -> RiskTier {
        if p < MODERATE_THRESHOLD {
            RiskTier::Low
        } else if p < HIGH_THRESHOLD {
            RiskTier::Moderate
        } else {
            RiskTier::High
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RiskTier::Low => "🟢",
            RiskTier::Moderate => "🟡",
            RiskTier::High => "🔴",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
        }
    }
}

/// Traffic-light status line shown at the top of a triage report,
/// e.g. `"🟡 Moderate Risk (0.45)"`.
pub fn risk_status_line(fusion_prob: f64) -> String {
    let tier = RiskTier::from_probability(fusion_prob);
    format!("{} {} Risk ({:.2})", tier.emoji(), tier.label(), fusion_prob)
}
