//! Presentation layer for the vigil triage toolkit.
//!
//! Turns model output into what a clinician actually sees: the traffic-light
//! status line ([`risk_status_line`]), the plain-text factor block
//! ([`factors_text`]), and the vitals trend chart as a standalone SVG string
//! ([`vitals_chart_svg`]).

pub mod chart;
pub mod factors;
pub mod tier;

pub use chart::{vitals_chart_svg, ChartOptions};
pub use factors::factors_text;
pub use tier::{risk_status_line, RiskTier, HIGH_THRESHOLD, MODERATE_THRESHOLD};
