//! Dental risk classification
//!
//! Risk codes are two characters: a letter A-G for the category and a +/-
//! sub-grade. The severity mapping is an explicit 14-entry table, not a
//! formula: E- and F+ are both VeryHigh while D+ and E+ are High, so the
//! rows cannot be derived from the letter alone.
//!
//! Two independent surfaces read the same code: [`classify_dental_risk`]
//! (the fine-grained table) and [`priority::priority_for_risk`] (a coarser
//! letter-only scheduling rule). They serve different consumers and stay
//! separate.

pub mod priority;

use crate::core::{ColorTag, Severity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Risk category letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLetter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl RiskLetter {
    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(RiskLetter::A),
            'B' => Some(RiskLetter::B),
            'C' => Some(RiskLetter::C),
            'D' => Some(RiskLetter::D),
            'E' => Some(RiskLetter::E),
            'F' => Some(RiskLetter::F),
            'G' => Some(RiskLetter::G),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            RiskLetter::A => 'A',
            RiskLetter::B => 'B',
            RiskLetter::C => 'C',
            RiskLetter::D => 'D',
            RiskLetter::E => 'E',
            RiskLetter::F => 'F',
            RiskLetter::G => 'G',
        }
    }
}

/// Risk sub-grade sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskSign {
    Plus,
    Minus,
}

impl RiskSign {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(RiskSign::Plus),
            '-' => Some(RiskSign::Minus),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            RiskSign::Plus => '+',
            RiskSign::Minus => '-',
        }
    }
}

/// A recognized two-character risk code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiskCode {
    pub letter: RiskLetter,
    pub sign: RiskSign,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRiskCodeError {
    #[error("risk code must be exactly two characters, got {0:?}")]
    Length(String),
    #[error("risk letter must be A-G, got {0:?}")]
    Letter(char),
    #[error("risk sign must be '+' or '-', got {0:?}")]
    Sign(char),
}

impl FromStr for RiskCode {
    type Err = ParseRiskCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (first, second, rest) = (chars.next(), chars.next(), chars.next());
        match (first, second, rest) {
            (Some(l), Some(sg), None) => {
                let letter =
                    RiskLetter::from_char(l).ok_or(ParseRiskCodeError::Letter(l))?;
                let sign = RiskSign::from_char(sg).ok_or(ParseRiskCodeError::Sign(sg))?;
                Ok(RiskCode { letter, sign })
            }
            _ => Err(ParseRiskCodeError::Length(s.to_string())),
        }
    }
}

impl fmt::Display for RiskCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter.as_char(), self.sign.as_char())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DentalAssessment {
    /// `None` marks an unrecognized input code, so callers can flag
    /// data-quality issues without the engine failing
    pub code: Option<RiskCode>,
    pub severity: Severity,
    pub color: ColorTag,
    pub description: String,
    pub recommendation: String,
}

struct RiskProfile {
    letter: RiskLetter,
    sign: RiskSign,
    severity: Severity,
    description: &'static str,
    recommendation: &'static str,
}

// Rows ordered (letter, sign) so that `letter * 2 + sign` indexes directly
static RISK_TABLE: [RiskProfile; 14] = [
    RiskProfile {
        letter: RiskLetter::A,
        sign: RiskSign::Plus,
        severity: Severity::Low,
        description: "Very low risk - excellent oral health",
        recommendation: "Maintain regular hygiene, annual visit",
    },
    RiskProfile {
        letter: RiskLetter::A,
        sign: RiskSign::Minus,
        severity: Severity::Low,
        description: "Low risk - good oral health",
        recommendation: "Maintain current care, annual visit",
    },
    RiskProfile {
        letter: RiskLetter::B,
        sign: RiskSign::Plus,
        severity: Severity::Low,
        description: "Low risk - minor preventive needs",
        recommendation: "Reinforce hygiene, visit in 8-12 months",
    },
    RiskProfile {
        letter: RiskLetter::B,
        sign: RiskSign::Minus,
        severity: Severity::Moderate,
        description: "Moderate risk - needs preventive attention",
        recommendation: "Intensify care, visit in 6 months",
    },
    RiskProfile {
        letter: RiskLetter::C,
        sign: RiskSign::Plus,
        severity: Severity::Moderate,
        description: "Moderate risk - early caries or gingivitis",
        recommendation: "Preventive treatment, visit in 6 months",
    },
    RiskProfile {
        letter: RiskLetter::C,
        sign: RiskSign::Minus,
        severity: Severity::Moderate,
        description: "Moderate-to-high risk - established problems",
        recommendation: "Treatment needed, visit in 4-6 months",
    },
    RiskProfile {
        letter: RiskLetter::D,
        sign: RiskSign::Plus,
        severity: Severity::High,
        description: "High risk - multiple caries or advanced gingivitis",
        recommendation: "Urgent treatment, visit in 3-4 months",
    },
    RiskProfile {
        letter: RiskLetter::D,
        sign: RiskSign::Minus,
        severity: Severity::High,
        description: "High risk - advanced lesions",
        recommendation: "Immediate treatment, monthly follow-up",
    },
    RiskProfile {
        letter: RiskLetter::E,
        sign: RiskSign::Plus,
        severity: Severity::High,
        description: "High risk - severe involvement",
        recommendation: "Complex treatment, frequent follow-up",
    },
    RiskProfile {
        letter: RiskLetter::E,
        sign: RiskSign::Minus,
        severity: Severity::VeryHigh,
        description: "Very high risk - critical condition",
        recommendation: "Immediate intervention, weekly follow-up",
    },
    RiskProfile {
        letter: RiskLetter::F,
        sign: RiskSign::Plus,
        severity: Severity::VeryHigh,
        description: "Very high risk - advanced critical state",
        recommendation: "Emergency treatment, continuous monitoring",
    },
    RiskProfile {
        letter: RiskLetter::F,
        sign: RiskSign::Minus,
        severity: Severity::VeryHigh,
        description: "Critical risk - generalized severe involvement",
        recommendation: "Emergency intervention, intensive follow-up",
    },
    RiskProfile {
        letter: RiskLetter::G,
        sign: RiskSign::Plus,
        severity: Severity::VeryHigh,
        description: "Critical risk - terminal state",
        recommendation: "Palliative treatment, special care",
    },
    RiskProfile {
        letter: RiskLetter::G,
        sign: RiskSign::Minus,
        severity: Severity::VeryHigh,
        description: "Maximum critical risk - total involvement",
        recommendation: "Palliative care, specialized support",
    },
];

fn profile_for(code: RiskCode) -> &'static RiskProfile {
    let sign_offset = match code.sign {
        RiskSign::Plus => 0,
        RiskSign::Minus => 1,
    };
    &RISK_TABLE[code.letter as usize * 2 + sign_offset]
}

/// Classify a raw risk code. Total: unparseable input maps to a Moderate
/// default with `code: None` rather than an error.
pub fn classify_dental_risk(code: &str) -> DentalAssessment {
    match code.parse::<RiskCode>() {
        Ok(parsed) => {
            let profile = profile_for(parsed);
            DentalAssessment {
                code: Some(parsed),
                severity: profile.severity,
                color: profile.severity.color(),
                description: profile.description.to_string(),
                recommendation: profile.recommendation.to_string(),
            }
        }
        Err(err) => {
            log::debug!("unrecognized dental risk code {code:?}: {err}");
            DentalAssessment {
                code: None,
                severity: Severity::Moderate,
                color: ColorTag::Caution,
                description: "Unrecognized risk classification".to_string(),
                recommendation: "Dental evaluation required".to_string(),
            }
        }
    }
}
