use std::sync::Once;

use pretty_assertions::assert_eq;
use vigil::{
    ExplainError, Explanation, ExplanationOrigin, LinearRiskModel, LinearSaliencyExplainer,
    PredictError, RiskPayload, RiskPrediction, RiskPredictor, RiskTier, SaliencyExplainer,
    TriageEngine, TriageError, VitalsIntake,
};

// Initialize the logger only once for all tests
static INIT: Once = Once::new();

fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Predictor stub standing in for the external fusion model.
struct StubPredictor {
    fusion_prob: f64,
}

impl RiskPredictor for StubPredictor {
    fn predict(&self, _payload: &RiskPayload) -> Result<RiskPrediction, PredictError> {
        Ok(RiskPrediction {
            xgb_prob: self.fusion_prob,
            fusion_prob: self.fusion_prob,
        })
    }

    fn name(&self) -> &str {
        "stub-fusion"
    }
}

/// Explainer stub standing in for an unavailable explanation service.
struct UnavailableExplainer;

impl SaliencyExplainer for UnavailableExplainer {
    fn explain(&self, _payload: &RiskPayload) -> Result<Explanation, ExplainError> {
        Err(ExplainError::Unavailable("service not deployed".into()))
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

fn demo_form() -> VitalsIntake {
    VitalsIntake {
        age: 55.0,
        sex: "M".into(),
        diabetes: 1,
        htn: 0,
        med_adherence: 0.8,
        glucose: 110.0,
        bp_systolic: 130.0,
        bp_diastolic: 85.0,
        hr: 75.0,
    }
}

#[test]
fn moderate_risk_assessment_with_unavailable_explainer() {
    init_logger();

    // 1. The nine fields as the front-end collects them
    let form = demo_form();

    // 2. Assess against a stub predictor and a dead explainer
    let engine = TriageEngine::new(
        Box::new(StubPredictor { fusion_prob: 0.45 }),
        Box::new(UnavailableExplainer),
    );
    let report = engine.assess(&form).unwrap();

    // 3. Status line: moderate tier, probability at two decimals
    assert_eq!(report.risk_status, "🟡 Moderate Risk (0.45)");
    assert_eq!(report.tier, RiskTier::Moderate);

    // 4. Factors degrade to the static example pairs, and say so
    assert_eq!(report.explanation.origin, ExplanationOrigin::Fallback);
    assert_eq!(
        report.factors_text,
        "Top XGBoost factors:\n\
         glucose_mean: 0.250\n\
         bp_systolic_last: 0.150\n\
         age: 0.100\n\
         \n\
         Top LSTM saliency:\n\
         glucose: 0.300\n\
         bp_systolic: 0.200\n\
         hr: 0.100"
    );

    // 5. Chart covers the three synthesized dates
    for date in ["2025-08-01", "2025-08-15", "2025-08-29"] {
        assert!(report.chart_svg.contains(date), "missing date label {date}");
    }
    assert_eq!(report.chart_svg.matches("rotate(-30").count(), 3);
}

#[test]
fn demo_backends_cover_the_whole_pipeline() {
    init_logger();

    let model = LinearRiskModel::demo();
    let engine = TriageEngine::new(
        Box::new(model.clone()),
        Box::new(LinearSaliencyExplainer::for_model(&model)),
    );
    let report = engine.assess(&demo_form()).unwrap();

    assert!((0.0..=1.0).contains(&report.prediction.fusion_prob));
    assert_eq!(report.explanation.origin, ExplanationOrigin::Model);
    assert_eq!(report.explanation.explanation.xgb_top.len(), 3);
    assert_eq!(report.explanation.explanation.lstm_top.len(), 3);
    assert!(report.chart_svg.contains("Patient Vitals Trend"));
}

#[test]
fn broken_predictor_gives_no_report() {
    init_logger();

    struct BrokenPredictor;

    impl RiskPredictor for BrokenPredictor {
        fn predict(&self, _payload: &RiskPayload) -> Result<RiskPrediction, PredictError> {
            Err(PredictError::Inference("tensor shape mismatch".into()))
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    let engine = TriageEngine::new(Box::new(BrokenPredictor), Box::new(UnavailableExplainer));
    let err = engine.assess(&demo_form()).unwrap_err();
    assert!(matches!(err, TriageError::Prediction(_)));
}

#[test]
fn boundary_probabilities_land_in_the_upper_tier() {
    init_logger();

    for (p, expected) in [
        (0.2999, "🟢 Low Risk (0.30)"),
        (0.30, "🟡 Moderate Risk (0.30)"),
        (0.60, "🔴 High Risk (0.60)"),
    ] {
        let engine = TriageEngine::new(
            Box::new(StubPredictor { fusion_prob: p }),
            Box::new(UnavailableExplainer),
        );
        let report = engine.assess(&demo_form()).unwrap();
        assert_eq!(report.risk_status, expected, "probability {p}");
    }
}

#[test]
fn half_formats_with_trailing_zero() {
    init_logger();

    let engine = TriageEngine::new(
        Box::new(StubPredictor { fusion_prob: 0.5 }),
        Box::new(UnavailableExplainer),
    );
    let report = engine.assess(&demo_form()).unwrap();
    assert_eq!(report.risk_status, "🟡 Moderate Risk (0.50)");
}
