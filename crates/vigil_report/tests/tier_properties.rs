use proptest::prelude::*;
use vigil_report::{risk_status_line, RiskTier, HIGH_THRESHOLD, MODERATE_THRESHOLD};

proptest! {
    #[test]
    fn tier_follows_the_threshold_chain(p in 0.0f64..=1.0) {
        let tier = RiskTier::from_probability(p);
        if p < MODERATE_THRESHOLD {
            prop_assert_eq!(tier, RiskTier::Low);
        } else if p < HIGH_THRESHOLD {
            prop_assert_eq!(tier, RiskTier::Moderate);
        } else {
            prop_assert_eq!(tier, RiskTier::High);
        }
    }

    #[test]
    fn tier_is_monotone_in_probability(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(RiskTier::from_probability(lo) <= RiskTier::from_probability(hi));
    }

    #[test]
    fn status_line_always_shows_two_decimals(p in 0.0f64..=1.0) {
        let line = risk_status_line(p);
        let open = line.rfind('(').unwrap();
        let close = line.rfind(')').unwrap();
        prop_assert_eq!(&line[open + 1..close], format!("{p:.2}"));
    }

    #[test]
    fn emoji_and_label_always_pair(p in 0.0f64..=1.0) {
        let line = risk_status_line(p);
        let pairs = [("🟢", "Low"), ("🟡", "Moderate"), ("🔴", "High")];
        let matched: Vec<_> = pairs.iter().filter(|(emoji, _)| line.contains(emoji)).collect();
        prop_assert_eq!(matched.len(), 1);
        let (emoji, label) = matched[0];
        prop_assert!(line.starts_with(emoji));
        prop_assert!(line.contains(label));
    }
}
