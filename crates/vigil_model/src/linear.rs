//! Deterministic linear demonstration backends.
//!
//! Stand-ins for the external gradient-boosted and sequence models: weighted
//! payload features through a sigmoid on the tabular side, a drift-slope score
//! on the sequence side, fused by averaging. They keep the seams exercised in
//! examples and tests; they are not clinical models.

use serde::{Deserialize, Serialize};

use vigil_core::RiskPayload;

use crate::backend::{
    ExplainError, PredictError, RiskPrediction, RiskPredictor, SaliencyExplainer,
};
use crate::explain::{Explanation, FactorScore};

/// Tabular feature order shared by the demo model and explainer.
pub const TABULAR_FEATURES: [&str; 6] = [
    "age",
    "diabetes",
    "htn",
    "med_adherence",
    "glucose_mean",
    "bp_systolic_last",
];

/// Sequence-side vitals, in payload order.
pub const SEQUENCE_FEATURES: [&str; 4] = ["glucose", "bp_systolic", "bp_diastolic", "hr"];

/// A linear scorer over [`TABULAR_FEATURES`] fused with a series drift score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRiskModel {
    pub weights: Vec<f64>,
    pub bias: f64,
    pub model_name: String,
}

impl LinearRiskModel {
    /// Demo weights: adherence protective, everything else risk-increasing.
    pub fn demo() -> Self {
        Self {
            weights: vec![0.5, 0.6, 0.4, -0.5, 0.9, 0.7],
            bias: -0.8,
            model_name: "linear-demo".into(),
        }
    }
}

impl RiskPredictor for LinearRiskModel {
    fn predict(&self, payload: &RiskPayload) -> Result<RiskPrediction, PredictError> {
        let features = tabular_features(payload)
            .ok_or_else(|| PredictError::InvalidPayload("empty vitals series".into()))?;
        if features.len() != self.weights.len() {
            return Err(PredictError::Inference(format!(
                "expected {} features, got {}",
                self.weights.len(),
                features.len()
            )));
        }

        let score: f64 = self
            .weights
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum();
        let xgb_prob = sigmoid(score + self.bias);
        let seq_prob = (0.5 + 2.0 * mean_relative_drift(payload)).clamp(0.0, 1.0);
        let fusion_prob = ((xgb_prob + seq_prob) / 2.0).clamp(0.0, 1.0);

        Ok(RiskPrediction {
            xgb_prob,
            fusion_prob,
        })
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}

/// Ranks tabular contributions (weight × value) and per-vital drift
/// magnitudes, top `top_k` each.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearSaliencyExplainer {
    pub weights: Vec<f64>,
    pub top_k: usize,
    pub model_name: String,
}

impl LinearSaliencyExplainer {
    pub fn demo() -> Self {
        Self::for_model(&LinearRiskModel::demo())
    }

    /// An explainer aligned with `model`'s weights.
    pub fn for_model(model: &LinearRiskModel) -> Self {
        Self {
            weights: model.weights.clone(),
            top_k: 3,
            model_name: format!("{}-saliency", model.model_name),
        }
    }
}

impl SaliencyExplainer for LinearSaliencyExplainer {
    fn explain(&self, payload: &RiskPayload) -> Result<Explanation, ExplainError> {
        let features = tabular_features(payload)
            .ok_or_else(|| ExplainError::InvalidPayload("empty vitals series".into()))?;
        if features.len() != self.weights.len() {
            return Err(ExplainError::Saliency(format!(
                "expected {} features, got {}",
                self.weights.len(),
                features.len()
            )));
        }

        let mut xgb_top: Vec<FactorScore> = self
            .weights
            .iter()
            .zip(features.iter())
            .enumerate()
            .map(|(i, (w, x))| FactorScore::new(TABULAR_FEATURES[i], w * x))
            .collect();
        rank_by_magnitude(&mut xgb_top);
        xgb_top.truncate(self.top_k);

        let mut lstm_top: Vec<FactorScore> = relative_drifts(payload)
            .into_iter()
            .map(|(feature, drift)| FactorScore::new(feature, drift))
            .collect();
        rank_by_magnitude(&mut lstm_top);
        lstm_top.truncate(self.top_k);

        Ok(Explanation { xgb_top, lstm_top })
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn rank_by_magnitude(factors: &mut [FactorScore]) {
    factors.sort_by(|a, b| {
        b.score
            .abs()
            .partial_cmp(&a.score.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Derive the tabular feature vector, scaled into rough [0, 1] ranges.
/// `None` when the payload carries no readings.
fn tabular_features(payload: &RiskPayload) -> Option<Vec<f64>> {
    let last = payload.ts.last()?;
    let glucose_mean =
        payload.ts.iter().map(|r| r.glucose).sum::<f64>() / payload.ts.len() as f64;
    let p = &payload.profile;
    Some(vec![
        p.age as f64 / 100.0,
        p.diabetes as f64,
        p.htn as f64,
        p.med_adherence,
        glucose_mean / 200.0,
        last.bp_systolic / 200.0,
    ])
}

/// Relative first-to-last drift per vital; zero when a baseline value is zero
/// or the series has fewer than two points.
fn relative_drifts(payload: &RiskPayload) -> Vec<(&'static str, f64)> {
    let (first, last) = match (payload.ts.first(), payload.ts.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return SEQUENCE_FEATURES.iter().map(|f| (*f, 0.0)).collect(),
    };
    let raw = [
        (first.glucose, last.glucose),
        (first.bp_systolic, last.bp_systolic),
        (first.bp_diastolic, last.bp_diastolic),
        (first.hr, last.hr),
    ];
    SEQUENCE_FEATURES
        .iter()
        .zip(raw)
        .map(|(feature, (a, b))| {
            let drift = if a == 0.0 { 0.0 } else { (b - a) / a };
            (*feature, drift)
        })
        .collect()
}

fn mean_relative_drift(payload: &RiskPayload) -> f64 {
    let drifts = relative_drifts(payload);
    drifts.iter().map(|(_, d)| d).sum::<f64>() / drifts.len() as f64
}
