//! Engine configuration.
//!
//! Everything an assessment depends on besides the models themselves rides in
//! [`TriageConfig`]: the synthetic-series start date and drift, the intake
//! policy, the explainer failure policy, and the chart geometry. The config is
//! plain serde data, so a deployment can keep it in a JSON file and load it
//! with [`TriageConfig::from_json_file`]; every field has a default, so a file
//! only needs the fields it overrides.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use vigil_core::{DriftSchedule, IntakePolicy};
use vigil_report::ChartOptions;

/// Baseline date of the synthesized series when none is configured.
pub const DEFAULT_SERIES_START: NaiveDate = match NaiveDate::from_ymd_opt(2025, 8, 1) {
    Some(date) => date,
    None => panic!("2025-08-01 is a valid date"),
};

/// What an explainer failure does to an assessment.
///
/// Prediction has no such knob: a failed predictor always aborts the
/// assessment, because there is no report without a probability. Explanations
/// are decoration, so their failure handling is a policy choice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExplainFailurePolicy {
    /// Degrade to the static example factors. The report's explanation carries
    /// `ExplanationOrigin::Fallback` so the substitution stays visible.
    UseFallback,
    /// Surface the failure as `TriageError::Explanation` instead of masking
    /// it. For deployments where silently-defaulted factors are worse than no
    /// report.
    Propagate,
}

impl Default for ExplainFailurePolicy {
    fn default() -> Self {
        ExplainFailurePolicy::UseFallback
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Per-engine settings, serde round-trippable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TriageConfig {
    /// Date of the first synthesized reading; later points step forward by the
    /// drift schedule's interval.
    pub series_start: NaiveDate,
    pub drift: DriftSchedule,
    pub intake: IntakePolicy,
    pub on_explain_failure: ExplainFailurePolicy,
    pub chart: ChartOptions,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            series_start: DEFAULT_SERIES_START,
            drift: DriftSchedule::default(),
            intake: IntakePolicy::default(),
            on_explain_failure: ExplainFailurePolicy::default(),
            chart: ChartOptions::default(),
        }
    }
}

impl TriageConfig {
    /// Parse a config from a JSON object. Omitted fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<TriageConfig>(json)
    }

    /// Load a config from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Ok(Self::from_json_str(&data)?)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_field_values() {
        let config = TriageConfig::default();
        assert_eq!(config.series_start.to_string(), "2025-08-01");
        assert_eq!(config.drift.steps.len(), 3);
        assert_eq!(config.drift.interval_days, 14);
        assert_eq!(config.intake, IntakePolicy::Permissive);
        assert_eq!(config.on_explain_failure, ExplainFailurePolicy::UseFallback);
        assert_eq!(config.chart.title, "Patient Vitals Trend");
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config =
            TriageConfig::from_json_str(r#"{"on_explain_failure":"Propagate"}"#).unwrap();
        assert_eq!(config.on_explain_failure, ExplainFailurePolicy::Propagate);
        assert_eq!(config.series_start, DEFAULT_SERIES_START);
        assert_eq!(config.drift, DriftSchedule::default());
    }

    #[test]
    fn config_json_roundtrip() {
        let mut config = TriageConfig::default();
        config.chart.title = "Ward 3 Vitals".into();
        config.on_explain_failure = ExplainFailurePolicy::Propagate;

        let json = config.to_json_string().unwrap();
        let back = TriageConfig::from_json_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(TriageConfig::from_json_str("{not json").is_err());
    }
}
