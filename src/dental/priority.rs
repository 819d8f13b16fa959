//! Follow-up scheduling priority derived from the risk-code letter
//!
//! Deliberately coarser than the severity table in the parent module: the
//! sign is ignored and anything unrecognized schedules at the most urgent
//! window so bad data cannot push a visit out a year.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RiskLetter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
    Urgent,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
            Urgency::Urgent => "Urgent",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpPriority {
    pub urgency: Urgency,
    pub next_visit_days: u32,
}

/// Scheduling window for a raw risk code, keyed on the letter only.
/// Case-insensitive; unrecognized input is Urgent.
pub fn priority_for_risk(code: &str) -> FollowUpPriority {
    let letter = code
        .trim()
        .chars()
        .next()
        .and_then(RiskLetter::from_char);

    let (urgency, next_visit_days) = match letter {
        Some(RiskLetter::A) | Some(RiskLetter::B) => (Urgency::Low, 365),
        Some(RiskLetter::C) => (Urgency::Medium, 180),
        Some(RiskLetter::D) | Some(RiskLetter::E) => (Urgency::High, 90),
        Some(RiskLetter::F) | Some(RiskLetter::G) | None => (Urgency::Urgent, 30),
    };

    FollowUpPriority {
        urgency,
        next_visit_days,
    }
}
