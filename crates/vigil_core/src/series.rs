use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::patient::VitalsReading;

/// Multiplicative/additive drift applied to a baseline reading for one
/// synthesized point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriftStep {
    pub glucose_scale: f64,
    pub bp_systolic_delta: f64,
    pub bp_diastolic_delta: f64,
    pub hr_delta: f64,
}

/// A demo drift trend for turning a single reading into a plottable series.
/// The default schedule has no clinical basis; it only manufactures a trend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriftSchedule {
    pub steps: Vec<DriftStep>,
    pub interval_days: i64,
}

impl Default for DriftSchedule {
    fn default() -> Self {
        Self {
            steps: vec![
                DriftStep {
                    glucose_scale: 1.0,
                    bp_systolic_delta: 0.0,
                    bp_diastolic_delta: 0.0,
                    hr_delta: 0.0,
                },
                DriftStep {
                    glucose_scale: 1.05,
                    bp_systolic_delta: 2.0,
                    bp_diastolic_delta: 1.0,
                    hr_delta: 2.0,
                },
                DriftStep {
                    glucose_scale: 1.1,
                    bp_systolic_delta: 5.0,
                    bp_diastolic_delta: 3.0,
                    hr_delta: 4.0,
                },
            ],
            interval_days: 14,
        }
    }
}

/// Expand a single baseline reading into one reading per drift step. Step `i`
/// is dated `i * interval_days` days after the baseline; step 0 of the default
/// schedule is the identity, so the baseline itself leads the series.
pub fn synthesize_series(baseline: &VitalsReading, schedule: &DriftSchedule) -> Vec<VitalsReading> {
    schedule
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| VitalsReading {
            date: baseline.date + Duration::days(i as i64 * schedule.interval_days),
            glucose: baseline.glucose * step.glucose_scale,
            bp_systolic: baseline.bp_systolic + step.bp_systolic_delta,
            bp_diastolic: baseline.bp_diastolic + step.bp_diastolic_delta,
            hr: baseline.hr + step.hr_delta,
        })
        .collect()
}
