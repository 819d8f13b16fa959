//! Property-based checks: every classifier is total and deterministic

use proptest::prelude::*;
use screenmap::{
    classify_acuity, classify_bmi, classify_dental_risk, priority_for_risk, BmiCategory,
    GrowthReference, Sex, Urgency,
};

fn any_sex() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female)]
}

proptest! {
    /// Property: classification is deterministic - identical inputs always
    /// produce identical results, there is no hidden state to drift
    #[test]
    fn prop_bmi_classification_is_deterministic(
        weight in 5.0f64..150.0,
        height in 0.5f64..2.2,
        age in 0.0f64..30.0,
        sex in any_sex()
    ) {
        let first = classify_bmi(weight, height, age, sex);
        let second = classify_bmi(weight, height, age, sex);
        prop_assert_eq!(first, second);
    }

    /// Property: for tabulated ages, exactly one band matches - the four
    /// boundary comparisons partition the index axis
    #[test]
    fn prop_bands_partition_the_index_axis(
        index in 5.0f64..60.0,
        age in 5u32..=18,
        sex in any_sex()
    ) {
        let bounds = GrowthReference::cdc().lookup(f64::from(age), sex);
        let assessment = classify_bmi(index, 1.0, f64::from(age), sex);
        let expected = if index < bounds.p5 {
            BmiCategory::Below
        } else if index < bounds.p85 {
            BmiCategory::Healthy
        } else if index < bounds.p95 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        };
        prop_assert_eq!(assessment.category, expected);
    }

    /// Property: lookup never panics for any finite age
    #[test]
    fn prop_growth_lookup_is_total(age in 0.0f64..120.0, sex in any_sex()) {
        let bounds = GrowthReference::cdc().lookup(age, sex);
        prop_assert!(bounds.p5 < bounds.p85 && bounds.p85 < bounds.p95);
    }

    /// Property: acuity classification is deterministic and total over the
    /// measurement domain, including missing readings
    #[test]
    fn prop_acuity_is_deterministic(
        od in proptest::option::of(0.0f64..=2.0),
        oe in proptest::option::of(0.0f64..=2.0)
    ) {
        let first = classify_acuity(od, oe);
        let second = classify_acuity(od, oe);
        prop_assert_eq!(first, second);
    }

    /// Property: the dental surfaces accept arbitrary strings without
    /// panicking and always produce a defined output
    #[test]
    fn prop_dental_surfaces_are_total(code in ".{0,8}") {
        let assessment = classify_dental_risk(&code);
        prop_assert!(!assessment.description.is_empty());
        prop_assert!(!assessment.recommendation.is_empty());

        let priority = priority_for_risk(&code);
        prop_assert!(matches!(
            priority.next_visit_days,
            30 | 90 | 180 | 365
        ));
    }

    /// Property: recognized codes echo the parsed code back; everything else
    /// is marked unrecognized, never silently classified
    #[test]
    fn prop_recognized_codes_round_trip(code in "[A-Ga-g][+-]") {
        let assessment = classify_dental_risk(&code);
        let parsed = assessment.code.expect("two-character A-G code must parse");
        prop_assert_eq!(parsed.to_string(), code.to_uppercase());
    }

    /// Property: priority ignores the sign entirely
    #[test]
    fn prop_priority_ignores_sign(letter in "[A-G]") {
        let plus = priority_for_risk(&format!("{letter}+"));
        let minus = priority_for_risk(&format!("{letter}-"));
        prop_assert_eq!(plus, minus);
    }

    /// Property: unrecognized letters always schedule at the tightest window
    #[test]
    fn prop_unknown_letters_are_urgent(code in "[H-Zh-z0-9][+-]?") {
        prop_assert_eq!(priority_for_risk(&code).urgency, Urgency::Urgent);
    }
}
