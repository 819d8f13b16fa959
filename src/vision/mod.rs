//! Visual acuity classification over a pair of optional per-eye readings
//!
//! OD is the right eye, OE the left. Readings live in [0, 2]; a missing eye
//! is treated as the best possible score, so it can never trigger a problem
//! on its own. The problem boundary is inclusive at 0.6.

use crate::core::ColorTag;
use serde::{Deserialize, Serialize};
use std::fmt;

const BEST_SCORE: f64 = 2.0;
const PROBLEM_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcuityStatus {
    /// Neither eye was measured
    Incomplete,
    Normal,
    Problem,
}

impl fmt::Display for AcuityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AcuityStatus::Incomplete => "Incomplete",
            AcuityStatus::Normal => "Normal",
            AcuityStatus::Problem => "Problem",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcuityAssessment {
    pub status: AcuityStatus,
    pub color: ColorTag,
    pub description: String,
}

/// Classify a two-eye screening. Total: missing readings degrade to
/// `Incomplete` rather than failing.
pub fn classify_acuity(od: Option<f64>, oe: Option<f64>) -> AcuityAssessment {
    if od.is_none() && oe.is_none() {
        return AcuityAssessment {
            status: AcuityStatus::Incomplete,
            color: ColorTag::Neutral,
            description: "Incomplete assessment".to_string(),
        };
    }

    let worst = od.unwrap_or(BEST_SCORE).min(oe.unwrap_or(BEST_SCORE));

    if worst <= PROBLEM_THRESHOLD {
        return AcuityAssessment {
            status: AcuityStatus::Problem,
            color: ColorTag::Critical,
            description: format!("Visual problem detected (lowest reading: {worst:.2})"),
        };
    }

    AcuityAssessment {
        status: AcuityStatus::Normal,
        color: ColorTag::Positive,
        description: format!(
            "Normal vision (OD: {}, OE: {})",
            format_reading(od),
            format_reading(oe)
        ),
    }
}

fn format_reading(reading: Option<f64>) -> String {
    match reading {
        Some(value) => format!("{value:.2}"),
        None => "N/A".to_string(),
    }
}
