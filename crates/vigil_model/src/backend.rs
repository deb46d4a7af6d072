//! Pluggable predictor and explainer seams.
//!
//! The real models are external to this repository; these traits are the
//! boundary an assessment crosses. Predictor failures carry no fallback at
//! this layer, explainer failures are handled by
//! [`crate::explain::explain_or_fallback`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vigil_core::RiskPayload;

use crate::explain::Explanation;

/// Errors a risk predictor can surface.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
    #[error("inference failed: {0}")]
    Inference(String),
    #[error("predictor unavailable: {0}")]
    Unavailable(String),
}

/// Errors a saliency explainer can surface.
#[derive(Debug, Error)]
pub enum ExplainError {
    #[error("invalid payload: {0}")]
    InvalidPayload(String),
    #[error("saliency computation failed: {0}")]
    Saliency(String),
    #[error("explainer unavailable: {0}")]
    Unavailable(String),
}

/// Sub-model probabilities in [0, 1]. Downstream consumes `fusion_prob`;
/// `xgb_prob` rides along for report context.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RiskPrediction {
    pub xgb_prob: f64,
    pub fusion_prob: f64,
}

/// A model that turns a payload into sub-model probabilities.
pub trait RiskPredictor: Send + Sync {
    fn predict(&self, payload: &RiskPayload) -> Result<RiskPrediction, PredictError>;

    /// Identifier used in logs and reports.
    fn name(&self) -> &str;
}

/// A model that ranks per-feature contributions for a payload.
pub trait SaliencyExplainer: Send + Sync {
    fn explain(&self, payload: &RiskPayload) -> Result<Explanation, ExplainError>;

    /// Identifier used in logs and reports.
    fn name(&self) -> &str;
}
