// Export modules for library usage
pub mod bmi;
pub mod core;
pub mod dental;
pub mod growth;
pub mod vision;

// Re-export commonly used types
pub use crate::core::{ColorTag, Severity, Sex};

pub use crate::growth::{
    GrowthReference, PercentileSet, ReferenceEntry, Resolution, ResolvedPercentiles,
};

pub use crate::bmi::{
    bmi_index, classify_bmi, classify_bmi_with, BmiAssessment, BmiCategory, PercentileBand,
};

pub use crate::vision::{classify_acuity, AcuityAssessment, AcuityStatus};

pub use crate::dental::{
    classify_dental_risk,
    priority::{priority_for_risk, FollowUpPriority, Urgency},
    DentalAssessment, ParseRiskCodeError, RiskCode, RiskLetter, RiskSign,
};
