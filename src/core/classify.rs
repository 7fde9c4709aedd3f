use serde::Serialize;

use super::types::Scenario;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Strategy {
    Conservative,
    Balanced,
    Aggressive,
}

impl Strategy {
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Conservative => "Conservative",
            Strategy::Balanced => "Balanced",
            Strategy::Aggressive => "Aggressive",
        }
    }

    pub fn badge(self) -> BadgePalette {
        match self {
            Strategy::Conservative => BadgePalette {
                background: "#DBEAFE",
                text: "#1E40AF",
            },
            Strategy::Balanced => BadgePalette {
                background: "#D1FAE5",
                text: "#065F46",
            },
            Strategy::Aggressive => BadgePalette {
                background: "#FEE2E2",
                text: "#991B1B",
            },
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }

    pub fn badge(self) -> BadgePalette {
        match self {
            RiskTier::Low => BadgePalette {
                background: "#D1FAE5",
                text: "#065F46",
            },
            RiskTier::Medium => BadgePalette {
                background: "#D1FAE5",
                text: "#10B981",
            },
            RiskTier::High => BadgePalette {
                background: "#FEE2E2",
                text: "#991B1B",
            },
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct BadgePalette {
    pub background: &'static str,
    pub text: &'static str,
}

#[derive(Copy, Clone, Debug)]
pub struct Classification {
    pub strategy: Strategy,
    pub risk: RiskTier,
    pub profitability: &'static str,
    pub marker_color: &'static str,
}

// Strategy, risk tier, profitability text, and marker color all derive from
// the same ROI bands; both threshold bounds are closed at the low end.
pub fn classify(roi: f64) -> Classification {
    if roi >= 16.0 {
        Classification {
            strategy: Strategy::Aggressive,
            risk: RiskTier::High,
            profitability: "High expected returns",
            marker_color: "#ef4444",
        }
    } else if roi >= 12.0 {
        Classification {
            strategy: Strategy::Balanced,
            risk: RiskTier::Medium,
            profitability: "Moderate expected returns",
            marker_color: "#10B981",
        }
    } else {
        Classification {
            strategy: Strategy::Conservative,
            risk: RiskTier::Low,
            profitability: "Lower expected returns",
            marker_color: "#06b6d4",
        }
    }
}

pub fn classify_scenario(scenario: &Scenario) -> Classification {
    classify(scenario.roi.or_zero())
}

// The ideal scenario is the global minimum of years_to_fi, and only if that
// minimum happens to be a Balanced, low-or-medium-risk entry. A faster but
// riskier scenario suppresses the highlight entirely; no second scan runs.
pub fn ideal_index(scenarios: &[Scenario]) -> Option<usize> {
    if scenarios.is_empty() {
        return None;
    }

    let mut best = 0;
    for idx in 1..scenarios.len() {
        // Promotion requires both sides to be available; an unavailable
        // incumbent is never displaced, matching the first-wins tie rule.
        if let (Some(candidate), Some(incumbent)) = (
            scenarios[idx].years_to_fi.positive(),
            scenarios[best].years_to_fi.positive(),
        ) {
            if candidate < incumbent {
                best = idx;
            }
        }
    }

    let class = classify_scenario(&scenarios[best]);
    if class.strategy == Strategy::Balanced
        && matches!(class.risk, RiskTier::Low | RiskTier::Medium)
    {
        Some(best)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Numeric;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};
    use proptest::{collection, option, prop_compose};

    fn scenario(roi: f64, years: f64, age: f64) -> Scenario {
        Scenario {
            roi: Numeric::from_f64(roi),
            years_to_fi: Numeric::from_f64(years),
            age_at_fi: Numeric::from_f64(age),
        }
    }

    #[test]
    fn classifies_roi_bands_with_closed_lower_bounds() {
        assert_eq!(classify(11.999).strategy, Strategy::Conservative);
        assert_eq!(classify(12.0).strategy, Strategy::Balanced);
        assert_eq!(classify(15.999).strategy, Strategy::Balanced);
        assert_eq!(classify(16.0).strategy, Strategy::Aggressive);
    }

    #[test]
    fn risk_tier_tracks_strategy() {
        assert_eq!(classify(8.0).risk, RiskTier::Low);
        assert_eq!(classify(13.0).risk, RiskTier::Medium);
        assert_eq!(classify(20.0).risk, RiskTier::High);
    }

    #[test]
    fn profitability_labels_match_bands() {
        assert_eq!(classify(8.0).profitability, "Lower expected returns");
        assert_eq!(classify(13.0).profitability, "Moderate expected returns");
        assert_eq!(classify(20.0).profitability, "High expected returns");
    }

    #[test]
    fn marker_colors_match_bands() {
        assert_eq!(classify(8.0).marker_color, "#06b6d4");
        assert_eq!(classify(13.0).marker_color, "#10B981");
        assert_eq!(classify(20.0).marker_color, "#ef4444");
    }

    #[test]
    fn unavailable_roi_classifies_as_conservative() {
        let s = Scenario {
            roi: Numeric::NotAvailable,
            years_to_fi: Numeric::Value(10.0),
            age_at_fi: Numeric::Value(35.0),
        };
        assert_eq!(classify_scenario(&s).strategy, Strategy::Conservative);
    }

    #[test]
    fn fastest_scenario_being_aggressive_suppresses_the_highlight() {
        let scenarios = [
            scenario(10.0, 20.0, 45.0),
            scenario(13.0, 15.0, 40.0),
            scenario(18.0, 10.0, 35.0),
        ];
        assert_eq!(ideal_index(&scenarios), None);
    }

    #[test]
    fn balanced_global_minimum_is_ideal() {
        let scenarios = [scenario(10.0, 20.0, 45.0), scenario(13.0, 15.0, 40.0)];
        assert_eq!(ideal_index(&scenarios), Some(1));
    }

    #[test]
    fn ties_keep_the_earliest_scenario() {
        let scenarios = [scenario(13.0, 15.0, 40.0), scenario(14.0, 15.0, 40.0)];
        assert_eq!(ideal_index(&scenarios), Some(0));
    }

    #[test]
    fn unavailable_years_never_promote_a_candidate() {
        let scenarios = [
            Scenario {
                roi: Numeric::Value(13.0),
                years_to_fi: Numeric::NotAvailable,
                age_at_fi: Numeric::NotAvailable,
            },
            scenario(14.0, 5.0, 30.0),
        ];
        // The unavailable incumbent sticks; it is Balanced, so it is ideal.
        assert_eq!(ideal_index(&scenarios), Some(0));
    }

    #[test]
    fn negative_years_are_treated_as_unavailable() {
        let scenarios = [scenario(13.0, 15.0, 40.0), scenario(14.0, -5.0, 30.0)];
        assert_eq!(ideal_index(&scenarios), Some(0));
    }

    #[test]
    fn empty_scenario_list_has_no_ideal() {
        assert_eq!(ideal_index(&[]), None);
    }

    #[test]
    fn single_balanced_scenario_is_ideal() {
        assert_eq!(ideal_index(&[scenario(12.0, 18.0, 43.0)]), Some(0));
    }

    #[test]
    fn single_aggressive_scenario_is_not_ideal() {
        assert_eq!(ideal_index(&[scenario(16.0, 8.0, 33.0)]), None);
    }

    prop_compose! {
        fn arb_scenario()(
            roi in -50.0f64..50.0,
            years in option::of(0.5f64..60.0),
            age in option::of(20.0f64..90.0),
        ) -> Scenario {
            Scenario {
                roi: Numeric::from_f64(roi),
                years_to_fi: years.map(Numeric::from_f64).unwrap_or(Numeric::NotAvailable),
                age_at_fi: age.map(Numeric::from_f64).unwrap_or(Numeric::NotAvailable),
            }
        }
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]
        #[test]
        fn every_roi_lands_in_exactly_one_band(roi in -1000.0f64..1000.0) {
            let class = classify(roi);
            let expected = if roi >= 16.0 {
                Strategy::Aggressive
            } else if roi >= 12.0 {
                Strategy::Balanced
            } else {
                Strategy::Conservative
            };
            prop_assert_eq!(class.strategy, expected);
        }

        #[test]
        fn ideal_index_is_in_bounds_and_balanced(
            scenarios in collection::vec(arb_scenario(), 0..8)
        ) {
            if let Some(idx) = ideal_index(&scenarios) {
                prop_assert!(idx < scenarios.len());
                prop_assert_eq!(classify_scenario(&scenarios[idx]).strategy, Strategy::Balanced);
            }
        }
    }
}
