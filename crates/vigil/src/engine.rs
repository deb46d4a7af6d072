//! The triage engine: one synchronous assessment per call.
//!
//! Error policy, deliberately asymmetric:
//!
//! - **Prediction hard-fails.** The probability is what the report is about,
//!   so a predictor failure always aborts the assessment as
//!   [`TriageError::Prediction`]. There is no fallback probability.
//! - **Explanation soft-fails by default.** Factors are decoration on top of
//!   the score. Under [`ExplainFailurePolicy::UseFallback`] an explainer
//!   failure degrades to the static example factors, logged and tagged with
//!   [`ExplanationOrigin::Fallback`] so it never masquerades as model output.
//!   [`ExplainFailurePolicy::Propagate`] turns the same failure into
//!   [`TriageError::Explanation`] for callers that would rather abort.
//!
//! Each call is stateless and runs to completion; the engine holds no mutable
//! state, so one instance can serve concurrent callers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vigil_core::{
    coerce_intake, synthesize_series, IntakeError, RiskPayload, VitalsIntake, VitalsReading,
};
use vigil_model::{
    explain_or_fallback, ExplainError, ExplanationOrigin, PredictError, ResolvedExplanation,
    RiskPrediction, RiskPredictor, SaliencyExplainer,
};
use vigil_report::{factors_text, risk_status_line, vitals_chart_svg, RiskTier};

use crate::config::{ExplainFailurePolicy, TriageConfig};

/// Errors an assessment can surface.
#[derive(Debug, Error)]
pub enum TriageError {
    #[error("intake rejected: {0}")]
    Intake(#[from] IntakeError),
    #[error("prediction failed: {0}")]
    Prediction(#[from] PredictError),
    /// Only under [`ExplainFailurePolicy::Propagate`]; the default policy
    /// resolves explainer failures to the fallback factors instead.
    #[error("explanation failed: {0}")]
    Explanation(#[from] ExplainError),
}

/// Everything one assessment produces: the three display surfaces (status
/// line, factors text, chart SVG) plus the structured values they were
/// rendered from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TriageReport {
    /// Traffic-light status line, e.g. `"🟡 Moderate Risk (0.45)"`.
    pub risk_status: String,
    pub tier: RiskTier,
    pub prediction: RiskPrediction,
    /// Two-section plain-text factor listing.
    pub factors_text: String,
    /// The factors behind `factors_text`, tagged with their origin.
    pub explanation: ResolvedExplanation,
    /// Standalone SVG document; empty when the series has no points.
    pub chart_svg: String,
    /// The synthesized series the predictor and the chart both saw.
    pub series: Vec<VitalsReading>,
}

/// A predictor and an explainer behind one assessment entry point.
pub struct TriageEngine {
    predictor: Box<dyn RiskPredictor>,
    explainer: Box<dyn SaliencyExplainer>,
    config: TriageConfig,
}

impl TriageEngine {
    /// Engine with the default configuration.
    pub fn new(predictor: Box<dyn RiskPredictor>, explainer: Box<dyn SaliencyExplainer>) -> Self {
        Self::with_config(predictor, explainer, TriageConfig::default())
    }

    pub fn with_config(
        predictor: Box<dyn RiskPredictor>,
        explainer: Box<dyn SaliencyExplainer>,
        config: TriageConfig,
    ) -> Self {
        Self {
            predictor,
            explainer,
            config,
        }
    }

    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    /// Run one assessment over the nine intake fields.
    ///
    /// Coerces the intake per the configured policy, synthesizes the vitals
    /// series, predicts, tiers the fusion probability, resolves the
    /// explanation per the failure policy, and renders the factors text and
    /// the chart.
    pub fn assess(&self, intake: &VitalsIntake) -> Result<TriageReport, TriageError> {
        let (profile, baseline) =
            coerce_intake(intake, self.config.series_start, &self.config.intake)?;
        let ts = synthesize_series(&baseline, &self.config.drift);
        let payload = RiskPayload { profile, ts };

        let prediction = self.predictor.predict(&payload)?;
        log::debug!(
            "predictor {} fused probability {:.4}",
            self.predictor.name(),
            prediction.fusion_prob
        );

        let tier = RiskTier::from_probability(prediction.fusion_prob);
        let risk_status = risk_status_line(prediction.fusion_prob);

        let explanation = match self.config.on_explain_failure {
            ExplainFailurePolicy::UseFallback => {
                explain_or_fallback(self.explainer.as_ref(), &payload)
            }
            ExplainFailurePolicy::Propagate => ResolvedExplanation {
                explanation: self.explainer.explain(&payload)?,
                origin: ExplanationOrigin::Model,
            },
        };

        let factors = factors_text(&explanation.explanation);
        let chart_svg = vitals_chart_svg(&payload.ts, &self.config.chart);

        Ok(TriageReport {
            risk_status,
            tier,
            prediction,
            factors_text: factors,
            explanation,
            chart_svg,
            series: payload.ts,
        })
    }
}
