use vigil_model::{Explanation, FactorScore};

fn section(header: &str, factors: &[FactorScore]) -> String {
    let mut lines = Vec::with_capacity(factors.len() + 1);
    lines.push(header.to_string());
    for factor in factors {
        lines.push(format!("{}: {:.3}", factor.feature, factor.score));
    }
    lines.join("\n")
}

/// Render both ranked factor lists as the plain-text block shown next to the
/// status line. Scores are printed to three decimals, one factor per line,
/// and the two sections are separated by a blank line.
pub fn factors_text(explanation: &Explanation) -> String {
    let xgb = section("Top XGBoost factors:", &explanation.xgb_top);
    let lstm = section("Top LSTM saliency:", &explanation.lstm_top);
    format!("{xgb}\n\n{lstm}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vigil_model::fallback_explanation;

    #[test]
    fn fallback_factors_render_verbatim() {
        let text = factors_text(&fallback_explanation());
        let expected = "Top XGBoost factors:\n\
                        glucose_mean: 0.250\n\
                        bp_systolic_last: 0.150\n\
                        age: 0.100\n\
                        \n\
                        Top LSTM saliency:\n\
                        glucose: 0.300\n\
                        bp_systolic: 0.200\n\
                        hr: 0.100";
        assert_eq!(text, expected);
    }

    #[test]
    fn scores_round_to_three_decimals() {
        let explanation = Explanation {
            xgb_top: vec![FactorScore::new("age", 0.123456)],
            lstm_top: vec![FactorScore::new("hr", 0.5)],
        };
        let text = factors_text(&explanation);
        assert!(text.contains("age: 0.123"));
        assert!(text.contains("hr: 0.500"));
    }

    #[test]
    fn empty_lists_leave_bare_headers() {
        let explanation = Explanation {
            xgb_top: vec![],
            lstm_top: vec![],
        };
        assert_eq!(
            factors_text(&explanation),
            "Top XGBoost factors:\n\nTop LSTM saliency:"
        );
    }
}
