//! Ranked feature contributions and the static fallback explanation.

use serde::{Deserialize, Serialize};

use vigil_core::RiskPayload;

use crate::backend::SaliencyExplainer;

/// One (feature, contribution score) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FactorScore {
    pub feature: String,
    pub score: f64,
}

impl FactorScore {
    pub fn new(feature: impl Into<String>, score: f64) -> Self {
        Self {
            feature: feature.into(),
            score,
        }
    }
}

/// Top contributing factors, one ranked list per sub-model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Explanation {
    pub xgb_top: Vec<FactorScore>,
    pub lstm_top: Vec<FactorScore>,
}

/// Where an explanation came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExplanationOrigin {
    /// Produced by the configured explainer.
    Model,
    /// The static example factors; the explainer failed or was unavailable.
    Fallback,
}

/// An explanation tagged with its origin, so callers and tests can tell model
/// output from the static default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolvedExplanation {
    pub explanation: Explanation,
    pub origin: ExplanationOrigin,
}

/// The fixed example factors used whenever no explainer output is available.
pub fn fallback_explanation() -> Explanation {
    Explanation {
        xgb_top: vec![
            FactorScore::new("glucose_mean", 0.25),
            FactorScore::new("bp_systolic_last", 0.15),
            FactorScore::new("age", 0.10),
        ],
        lstm_top: vec![
            FactorScore::new("glucose", 0.3),
            FactorScore::new("bp_systolic", 0.2),
            FactorScore::new("hr", 0.1),
        ],
    }
}

/// Run the explainer, degrading to [`fallback_explanation`] on any failure.
/// Total by construction: an explanation always comes back, and `origin`
/// records which one. The underlying failure is logged, not masked.
pub fn explain_or_fallback(
    explainer: &dyn SaliencyExplainer,
    payload: &RiskPayload,
) -> ResolvedExplanation {
    match explainer.explain(payload) {
        Ok(explanation) => ResolvedExplanation {
            explanation,
            origin: ExplanationOrigin::Model,
        },
        Err(err) => {
            log::warn!(
                "explainer {} failed, falling back to example factors: {err}",
                explainer.name()
            );
            ResolvedExplanation {
                explanation: fallback_explanation(),
                origin: ExplanationOrigin::Fallback,
            }
        }
    }
}
