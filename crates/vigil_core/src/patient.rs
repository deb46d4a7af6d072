use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Patient sex as captured by the intake form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sex {
    M,
    F,
}

impl Sex {
    /// Parse a form value, ignoring surrounding whitespace and case.
    pub fn parse(s: &str) -> Option<Sex> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("m") => Some(Sex::M),
            v if v.eq_ignore_ascii_case("f") => Some(Sex::F),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::M => "M",
            Sex::F => "F",
        }
    }
}

/// Static per-request patient attributes. Built fresh for each assessment and
/// discarded afterwards; nothing here outlives the call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientProfile {
    pub age: i64,
    pub sex: Sex,
    /// Diabetes flag, 0/1 on the wire.
    pub diabetes: u8,
    /// Hypertension flag, 0/1 on the wire.
    pub htn: u8,
    /// Medication adherence in [0, 1].
    pub med_adherence: f64,
}

/// One dated vitals sample.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitalsReading {
    pub date: NaiveDate,
    pub glucose: f64,
    pub bp_systolic: f64,
    pub bp_diastolic: f64,
    pub hr: f64,
}

/// The payload handed to a risk predictor: static attributes plus a short
/// vitals series. Serializes as `{"static": {...}, "ts": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskPayload {
    #[serde(rename = "static")]
    pub profile: PatientProfile,
    pub ts: Vec<VitalsReading>,
}

pub fn payload_from_json(s: &str) -> Result<RiskPayload, serde_json::Error> {
    serde_json::from_str::<RiskPayload>(s)
}

pub fn payload_to_json(p: &RiskPayload) -> Result<String, serde_json::Error> {
    serde_json::to_string(p)
}
