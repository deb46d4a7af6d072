//! vigil — chronic-risk vitals triage.
//!
//! One engine, one call: [`TriageEngine::assess`] takes the nine intake form
//! fields and produces a [`TriageReport`] carrying the traffic-light status
//! line, the top-factor text, and the vitals trend chart, plus the structured
//! values behind them. The predictor and explainer are pluggable seams; the
//! rest of the pipeline (coercion, series synthesis, tiering, rendering) lives
//! in the `vigil_core`, `vigil_model`, and `vigil_report` crates and is
//! re-exported here.
//!
//! ```
//! use vigil::{LinearRiskModel, LinearSaliencyExplainer, TriageEngine, VitalsIntake};
//!
//! let engine = TriageEngine::new(
//!     Box::new(LinearRiskModel::demo()),
//!     Box::new(LinearSaliencyExplainer::demo()),
//! );
//! let report = engine
//!     .assess(&VitalsIntake {
//!         age: 55.0,
//!         sex: "M".into(),
//!         diabetes: 1,
//!         htn: 0,
//!         med_adherence: 0.8,
//!         glucose: 110.0,
//!         bp_systolic: 130.0,
//!         bp_diastolic: 85.0,
//!         hr: 75.0,
//!     })
//!     .unwrap();
//! assert!(report.risk_status.contains("Risk ("));
//! assert_eq!(report.series.len(), 3);
//! assert!(report.chart_svg.starts_with("<svg"));
//! ```

pub mod config;
pub mod engine;

pub use config::{ConfigError, ExplainFailurePolicy, TriageConfig, DEFAULT_SERIES_START};
pub use engine::{TriageEngine, TriageError, TriageReport};

// The vocabulary the engine's API is spoken in.
pub use vigil_core::{
    DriftSchedule, DriftStep, IntakeError, IntakePolicy, PatientProfile, RiskPayload, Sex,
    VitalBounds, VitalsIntake, VitalsReading,
};
pub use vigil_model::{
    ExplainError, Explanation, ExplanationOrigin, FactorScore, LinearRiskModel,
    LinearSaliencyExplainer, PredictError, ResolvedExplanation, RiskPrediction, RiskPredictor,
    SaliencyExplainer,
};
pub use vigil_report::{ChartOptions, RiskTier};
