//! BMI-for-age classification
//!
//! Ages 5-18 classify against the growth reference percentiles; everything
//! outside that span uses the fixed adult cutoffs 18.5 / 25 / 30. Inputs are
//! assumed sane (positive weight/height); validation is a form-layer concern.

use crate::core::{ColorTag, Sex};
use crate::growth::{GrowthReference, ResolvedPercentiles};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four BMI bands. The filter vocabulary elsewhere mentions a fifth
/// "severe obesity" category, but no threshold for it exists in the source
/// data and this classifier never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Below,
    Healthy,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn color(self) -> ColorTag {
        match self {
            BmiCategory::Below => ColorTag::Neutral,
            BmiCategory::Healthy => ColorTag::Positive,
            BmiCategory::Overweight => ColorTag::Caution,
            BmiCategory::Obese => ColorTag::Critical,
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiCategory::Below => "Below",
            BmiCategory::Healthy => "Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        };
        write!(f, "{label}")
    }
}

/// Population-relative bracket backing a classification. `NotApplicable`
/// marks the adult-cutoff branch, where percentiles are not defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PercentileBand {
    BelowP5,
    P5ToP85,
    P85ToP95,
    AtOrAboveP95,
    NotApplicable,
}

impl fmt::Display for PercentileBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PercentileBand::BelowP5 => "< P5",
            PercentileBand::P5ToP85 => "P5-P85",
            PercentileBand::P85ToP95 => "P85-P95",
            PercentileBand::AtOrAboveP95 => "≥ P95",
            PercentileBand::NotApplicable => "N/A",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiAssessment {
    pub category: BmiCategory,
    pub band: PercentileBand,
    pub color: ColorTag,
    pub description: String,
}

/// Body-mass index: weight divided by height squared
pub fn bmi_index(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Classify against the shared CDC reference table
pub fn classify_bmi(weight_kg: f64, height_m: f64, age_years: f64, sex: Sex) -> BmiAssessment {
    classify_bmi_with(GrowthReference::cdc(), weight_kg, height_m, age_years, sex)
}

/// Classify against a caller-supplied reference table
pub fn classify_bmi_with(
    reference: &GrowthReference,
    weight_kg: f64,
    height_m: f64,
    age_years: f64,
    sex: Sex,
) -> BmiAssessment {
    let index = bmi_index(weight_kg, height_m);

    if !(5.0..=18.0).contains(&age_years) {
        return classify_adult(index);
    }

    let bounds = reference.lookup(age_years, sex);
    classify_by_percentiles(index, &bounds)
}

// Simplified adult cutoffs for ages the reference table does not cover
fn classify_adult(index: f64) -> BmiAssessment {
    let (category, description) = if index < 18.5 {
        (BmiCategory::Below, "Underweight (outside CDC range)")
    } else if index < 25.0 {
        (BmiCategory::Healthy, "Healthy weight (outside CDC range)")
    } else if index < 30.0 {
        (BmiCategory::Overweight, "Overweight (outside CDC range)")
    } else {
        (BmiCategory::Obese, "Obesity (outside CDC range)")
    };

    BmiAssessment {
        category,
        band: PercentileBand::NotApplicable,
        color: category.color(),
        description: description.to_string(),
    }
}

// Bands are left-closed/right-open except the top one, which is closed upward
fn classify_by_percentiles(index: f64, bounds: &ResolvedPercentiles) -> BmiAssessment {
    let (category, band, description) = if index < bounds.p5 {
        (
            BmiCategory::Below,
            PercentileBand::BelowP5,
            "Underweight (< 5th percentile)",
        )
    } else if index < bounds.p85 {
        (
            BmiCategory::Healthy,
            PercentileBand::P5ToP85,
            "Healthy weight (5th-85th percentile)",
        )
    } else if index < bounds.p95 {
        (
            BmiCategory::Overweight,
            PercentileBand::P85ToP95,
            "Overweight (85th-95th percentile)",
        )
    } else {
        (
            BmiCategory::Obese,
            PercentileBand::AtOrAboveP95,
            "Obesity (≥ 95th percentile)",
        )
    };

    BmiAssessment {
        category,
        band,
        color: category.color(),
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::Resolution;

    // Height 1.0 m makes the index equal the weight, so tests can target
    // percentile boundaries directly.
    fn classify_index(index: f64, age_years: f64, sex: Sex) -> BmiAssessment {
        classify_bmi(index, 1.0, age_years, sex)
    }

    #[test]
    fn test_index_at_p5_is_healthy_for_all_tabulated_ages() {
        for age in 5..=18 {
            for sex in [Sex::Male, Sex::Female] {
                let bounds = GrowthReference::cdc().lookup(f64::from(age), sex);
                assert_eq!(bounds.resolution, Resolution::Exact);

                let at_boundary = classify_index(bounds.p5, f64::from(age), sex);
                assert_eq!(
                    at_boundary.category,
                    BmiCategory::Healthy,
                    "index == p5 must be Healthy at age {age}"
                );

                let just_below = classify_index(bounds.p5 - 1e-6, f64::from(age), sex);
                assert_eq!(just_below.category, BmiCategory::Below);
                assert_eq!(just_below.band, PercentileBand::BelowP5);
            }
        }
    }

    #[test]
    fn test_index_at_p95_is_obese_for_all_tabulated_ages() {
        for age in 5..=18 {
            for sex in [Sex::Male, Sex::Female] {
                let bounds = GrowthReference::cdc().lookup(f64::from(age), sex);
                let assessment = classify_index(bounds.p95, f64::from(age), sex);
                assert_eq!(
                    assessment.category,
                    BmiCategory::Obese,
                    "top boundary is closed upward at age {age}"
                );
                assert_eq!(assessment.band, PercentileBand::AtOrAboveP95);
            }
        }
    }

    #[test]
    fn test_p85_boundary_enters_overweight_band() {
        let bounds = GrowthReference::cdc().lookup(10.0, Sex::Female);
        let assessment = classify_index(bounds.p85, 10.0, Sex::Female);
        assert_eq!(assessment.category, BmiCategory::Overweight);
        assert_eq!(assessment.band, PercentileBand::P85ToP95);
    }

    #[test]
    fn test_fractional_age_classifies_against_interpolated_bounds() {
        // p5 at age 7.5 male interpolates to 13.9
        let below = classify_index(13.85, 7.5, Sex::Male);
        assert_eq!(below.category, BmiCategory::Below);

        let healthy = classify_index(13.9, 7.5, Sex::Male);
        assert_eq!(healthy.category, BmiCategory::Healthy);
    }

    #[test]
    fn test_age_below_range_uses_adult_cutoffs() {
        // Index 17 would be Healthy for a 5-year-old but the adult cutoff is 18.5
        let assessment = classify_bmi(17.0, 1.0, 3.0, Sex::Male);
        assert_eq!(assessment.category, BmiCategory::Below);
        assert_eq!(assessment.band, PercentileBand::NotApplicable);
    }

    #[test]
    fn test_age_above_range_uses_adult_cutoffs() {
        let healthy = classify_index(24.9, 25.0, Sex::Female);
        assert_eq!(healthy.category, BmiCategory::Healthy);

        let overweight = classify_index(25.0, 25.0, Sex::Female);
        assert_eq!(overweight.category, BmiCategory::Overweight);

        let obese = classify_index(30.0, 25.0, Sex::Female);
        assert_eq!(obese.category, BmiCategory::Obese);
    }

    #[test]
    fn test_bmi_index_formula() {
        let index = bmi_index(60.0, 1.5);
        assert!((index - 26.666_666_666_666_668).abs() < 1e-12);
    }

    #[test]
    fn test_category_colors_follow_palette() {
        assert_eq!(BmiCategory::Below.color(), ColorTag::Neutral);
        assert_eq!(BmiCategory::Healthy.color(), ColorTag::Positive);
        assert_eq!(BmiCategory::Overweight.color(), ColorTag::Caution);
        assert_eq!(BmiCategory::Obese.color(), ColorTag::Critical);
    }

    #[test]
    fn test_band_labels() {
        assert_eq!(PercentileBand::BelowP5.to_string(), "< P5");
        assert_eq!(PercentileBand::P5ToP85.to_string(), "P5-P85");
        assert_eq!(PercentileBand::P85ToP95.to_string(), "P85-P95");
        assert_eq!(PercentileBand::AtOrAboveP95.to_string(), "≥ P95");
        assert_eq!(PercentileBand::NotApplicable.to_string(), "N/A");
    }
}
