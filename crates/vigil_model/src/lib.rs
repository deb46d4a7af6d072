//! Model seams for the vigil triage toolkit.
//!
//! [`RiskPredictor`] and [`SaliencyExplainer`] are the boundaries to the
//! external models; [`explain_or_fallback`] is the explicit soft-fail path for
//! explanations, and the `linear` module carries deterministic demo backends
//! for wiring and tests.

pub mod backend;
pub mod explain;
pub mod linear;

pub use backend::{
    ExplainError, PredictError, RiskPrediction, RiskPredictor, SaliencyExplainer,
};
pub use explain::{
    explain_or_fallback, fallback_explanation, Explanation, ExplanationOrigin, FactorScore,
    ResolvedExplanation,
};
pub use linear::{LinearRiskModel, LinearSaliencyExplainer, SEQUENCE_FEATURES, TABULAR_FEATURES};
