//! Form intake coercion.
//!
//! The UI hands over nine loosely typed form fields. Coercion mirrors the
//! front-end's behavior (ages truncate toward zero, sex parses from its radio
//! string, vitals stay floats). Range checking is a caller choice: the
//! permissive policy accepts anything the types can hold, the enforcing policy
//! checks caller-supplied bounds. No clinical limits are built in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::patient::{PatientProfile, Sex, VitalsReading};

/// The nine form fields, exactly as the front-end collects them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitalsIntake {
    pub age: f64,
    pub sex: String,
    pub diabetes: u8,
    pub htn: u8,
    pub med_adherence: f64,
    pub glucose: f64,
    pub bp_systolic: f64,
    pub bp_diastolic: f64,
    pub hr: f64,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum IntakeError {
    #[error("sex must be M or F, got {found:?}")]
    InvalidSex { found: String },
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("{field} must be 0 or 1, got {value}")]
    NonBinaryFlag { field: &'static str, value: u8 },
    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Inclusive per-field bounds for the enforcing policy. Supplied by the
/// caller; this crate does not guess clinical ranges.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitalBounds {
    pub age: (i64, i64),
    pub med_adherence: (f64, f64),
    pub glucose: (f64, f64),
    pub bp_systolic: (f64, f64),
    pub bp_diastolic: (f64, f64),
    pub hr: (f64, f64),
}

/// Whether intake values are range-checked before an assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum IntakePolicy {
    /// Accept whatever the field types hold. Negative ages, adherence above 1
    /// and non-binary flags all pass through untouched.
    Permissive,
    /// Reject non-finite vitals, non-binary flags, and values outside the
    /// supplied bounds.
    Enforce(VitalBounds),
}

impl Default for IntakePolicy {
    fn default() -> Self {
        IntakePolicy::Permissive
    }
}

/// Coerce the form fields into a typed profile plus the baseline reading dated
/// `baseline_date`. An unparseable sex is an error under either policy; every
/// other check belongs to [`IntakePolicy::Enforce`].
pub fn coerce_intake(
    intake: &VitalsIntake,
    baseline_date: NaiveDate,
    policy: &IntakePolicy,
) -> Result<(PatientProfile, VitalsReading), IntakeError> {
    let sex = Sex::parse(&intake.sex).ok_or_else(|| IntakeError::InvalidSex {
        found: intake.sex.clone(),
    })?;

    if let IntakePolicy::Enforce(bounds) = policy {
        enforce_bounds(intake, bounds)?;
    }

    let profile = PatientProfile {
        // Truncation toward zero, the front-end's integer coercion.
        age: intake.age as i64,
        sex,
        diabetes: intake.diabetes,
        htn: intake.htn,
        med_adherence: intake.med_adherence,
    };
    let baseline = VitalsReading {
        date: baseline_date,
        glucose: intake.glucose,
        bp_systolic: intake.bp_systolic,
        bp_diastolic: intake.bp_diastolic,
        hr: intake.hr,
    };
    Ok((profile, baseline))
}

fn enforce_bounds(intake: &VitalsIntake, bounds: &VitalBounds) -> Result<(), IntakeError> {
    let floats = [
        ("age", intake.age),
        ("med_adherence", intake.med_adherence),
        ("glucose", intake.glucose),
        ("bp_systolic", intake.bp_systolic),
        ("bp_diastolic", intake.bp_diastolic),
        ("hr", intake.hr),
    ];
    for (field, value) in floats {
        if !value.is_finite() {
            return Err(IntakeError::NonFinite { field, value });
        }
    }

    for (field, value) in [("diabetes", intake.diabetes), ("htn", intake.htn)] {
        if value > 1 {
            return Err(IntakeError::NonBinaryFlag { field, value });
        }
    }

    let age = intake.age as i64;
    if age < bounds.age.0 || age > bounds.age.1 {
        return Err(IntakeError::OutOfRange {
            field: "age",
            value: intake.age,
            min: bounds.age.0 as f64,
            max: bounds.age.1 as f64,
        });
    }

    let ranged = [
        ("med_adherence", intake.med_adherence, bounds.med_adherence),
        ("glucose", intake.glucose, bounds.glucose),
        ("bp_systolic", intake.bp_systolic, bounds.bp_systolic),
        ("bp_diastolic", intake.bp_diastolic, bounds.bp_diastolic),
        ("hr", intake.hr, bounds.hr),
    ];
    for (field, value, (min, max)) in ranged {
        if value < min || value > max {
            return Err(IntakeError::OutOfRange {
                field,
                value,
                min,
                max,
            });
        }
    }

    Ok(())
}
