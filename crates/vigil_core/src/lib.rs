//! Core data primitives for the vigil triage toolkit.
//!
//! - Typed patient profile, vitals readings, and the `{"static": .., "ts": ..}`
//!   predictor payload with JSON helpers
//! - Intake coercion from the nine form fields, with range checking as an
//!   explicit policy (`Permissive` by default, `Enforce` with caller bounds)
//! - Synthetic three-point vitals series from a single reading via a drift
//!   schedule
//!
//! Payload wire format:
//! ```
//! use vigil_core::{payload_from_json, payload_to_json};
//! let json = r#"{"static":{"age":55,"sex":"M","diabetes":1,"htn":0,"med_adherence":0.8},
//!                "ts":[{"date":"2025-08-01","glucose":110.0,"bp_systolic":130.0,
//!                       "bp_diastolic":85.0,"hr":75.0}]}"#;
//! let payload = payload_from_json(json).unwrap();
//! assert_eq!(payload.profile.age, 55);
//! assert!(payload_to_json(&payload).unwrap().contains("\"static\""));
//! ```
//!
//! Series synthesis:
//! ```
//! use chrono::NaiveDate;
//! use vigil_core::{synthesize_series, DriftSchedule, VitalsReading};
//! let baseline = VitalsReading {
//!     date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
//!     glucose: 100.0,
//!     bp_systolic: 120.0,
//!     bp_diastolic: 80.0,
//!     hr: 70.0,
//! };
//! let series = synthesize_series(&baseline, &DriftSchedule::default());
//! assert_eq!(series.len(), 3);
//! assert_eq!(series[2].date.to_string(), "2025-08-29");
//! ```

pub mod intake;
pub mod patient;
pub mod series;

pub use intake::{coerce_intake, IntakeError, IntakePolicy, VitalBounds, VitalsIntake};
pub use patient::{
    payload_from_json, payload_to_json, PatientProfile, RiskPayload, Sex, VitalsReading,
};
pub use series::{synthesize_series, DriftSchedule, DriftStep};
