//! Shared vocabulary types for the classification surfaces

use serde::{Deserialize, Serialize};
use std::fmt;

/// Biological sex, used to select the growth reference partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

/// Ordinal severity tier shared by the dental and visual surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl Severity {
    /// Presentation palette slot for this tier
    pub fn color(self) -> ColorTag {
        match self {
            Severity::Low => ColorTag::Positive,
            Severity::Moderate => ColorTag::Caution,
            Severity::High | Severity::VeryHigh => ColorTag::Critical,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::High => "High",
            Severity::VeryHigh => "Very High",
        };
        write!(f, "{label}")
    }
}

/// Four-tier presentation palette. The engine's contract is the category,
/// not the color; callers map these onto whatever styling they use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorTag {
    /// Informational, no judgement attached
    Neutral,
    Positive,
    Caution,
    Critical,
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ColorTag::Neutral => "neutral",
            ColorTag::Positive => "positive",
            ColorTag::Caution => "caution",
            ColorTag::Critical => "critical",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Moderate);
        assert!(Severity::Moderate < Severity::High);
        assert!(Severity::High < Severity::VeryHigh);
    }

    #[test]
    fn test_severity_palette_mapping() {
        assert_eq!(Severity::Low.color(), ColorTag::Positive);
        assert_eq!(Severity::Moderate.color(), ColorTag::Caution);
        assert_eq!(Severity::High.color(), ColorTag::Critical);
        assert_eq!(Severity::VeryHigh.color(), ColorTag::Critical);
    }
}
