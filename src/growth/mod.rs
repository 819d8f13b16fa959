//! CDC BMI-for-age reference table (ages 5-18) and percentile lookup
//!
//! The table carries the P5/P85/P95 boundaries per integer age and sex.
//! Lookup resolves any finite age through one of three rules: exact entry,
//! linear interpolation between the neighbouring entries, or nearest-neighbour
//! fallback. It never fails.

use crate::core::Sex;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Percentile boundaries for one (age, sex) cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileSet {
    pub p5: f64,
    pub p85: f64,
    pub p95: f64,
}

/// One row of the reference table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub age: u32,
    pub male: PercentileSet,
    pub female: PercentileSet,
}

impl ReferenceEntry {
    pub fn for_sex(&self, sex: Sex) -> PercentileSet {
        match sex {
            Sex::Male => self.male,
            Sex::Female => self.female,
        }
    }
}

/// How a lookup arrived at its boundaries. `Nearest` marks a degraded
/// resolution callers may want to flag as a data-quality issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    Exact,
    Interpolated,
    Nearest,
}

/// Lookup output: the resolved boundaries plus how they were obtained
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPercentiles {
    pub p5: f64,
    pub p85: f64,
    pub p95: f64,
    pub resolution: Resolution,
}

macro_rules! entry {
    ($age:literal, M: $mp5:literal / $mp85:literal / $mp95:literal,
                   F: $fp5:literal / $fp85:literal / $fp95:literal) => {
        ReferenceEntry {
            age: $age,
            male: PercentileSet { p5: $mp5, p85: $mp85, p95: $mp95 },
            female: PercentileSet { p5: $fp5, p85: $fp85, p95: $fp95 },
        }
    };
}

// Simplified CDC BMI-for-age table, ages 5-18
const CDC_BMI_REFERENCES: [ReferenceEntry; 14] = [
    entry!(5, M: 13.4 / 16.8 / 18.4, F: 13.2 / 16.8 / 18.8),
    entry!(6, M: 13.6 / 17.4 / 19.3, F: 13.4 / 17.3 / 19.7),
    entry!(7, M: 13.8 / 18.0 / 20.6, F: 13.6 / 17.9 / 20.9),
    entry!(8, M: 14.0 / 18.7 / 22.0, F: 13.8 / 18.7 / 22.3),
    entry!(9, M: 14.2 / 19.4 / 23.4, F: 14.0 / 19.5 / 23.8),
    entry!(10, M: 14.4 / 20.1 / 24.8, F: 14.2 / 20.3 / 25.4),
    entry!(11, M: 14.7 / 20.9 / 26.2, F: 14.5 / 21.2 / 27.0),
    entry!(12, M: 15.0 / 21.7 / 27.6, F: 14.8 / 22.1 / 28.6),
    entry!(13, M: 15.2 / 22.5 / 29.1, F: 15.1 / 22.9 / 30.1),
    entry!(14, M: 15.6 / 23.3 / 30.4, F: 15.4 / 23.7 / 31.4),
    entry!(15, M: 16.0 / 24.1 / 31.5, F: 15.7 / 24.3 / 32.4),
    entry!(16, M: 16.4 / 24.8 / 32.4, F: 16.0 / 24.8 / 33.1),
    entry!(17, M: 16.7 / 25.4 / 33.1, F: 16.2 / 25.2 / 33.6),
    entry!(18, M: 17.0 / 25.9 / 33.6, F: 16.4 / 25.5 / 34.0),
];

static CDC: Lazy<GrowthReference> = Lazy::new(|| GrowthReference::new(&CDC_BMI_REFERENCES));

/// Age-indexed growth reference, immutable after construction
#[derive(Debug)]
pub struct GrowthReference {
    entries: &'static [ReferenceEntry],
}

impl GrowthReference {
    /// The shared CDC table, initialized on first use
    pub fn cdc() -> &'static GrowthReference {
        &CDC
    }

    pub(crate) fn new(entries: &'static [ReferenceEntry]) -> Self {
        assert!(!entries.is_empty(), "growth reference table must not be empty");
        for pair in entries.windows(2) {
            debug_assert!(pair[0].age < pair[1].age, "ages must be strictly increasing");
        }
        for entry in entries {
            for set in [entry.male, entry.female] {
                debug_assert!(
                    set.p5 < set.p85 && set.p85 < set.p95,
                    "percentile boundaries out of order at age {}",
                    entry.age
                );
            }
        }
        Self { entries }
    }

    /// Inclusive age span covered by table rows
    pub fn age_range(&self) -> (u32, u32) {
        (self.entries[0].age, self.entries[self.entries.len() - 1].age)
    }

    /// Resolve percentile boundaries for any finite age. Exact entries win;
    /// fractional ages interpolate between the neighbouring rows; anything
    /// else falls back to the nearest row (lower age wins a tie).
    pub fn lookup(&self, age_years: f64, sex: Sex) -> ResolvedPercentiles {
        if age_years.fract() == 0.0 {
            if let Some(entry) = self.entry_at(age_years as u32) {
                return resolved(entry.for_sex(sex), Resolution::Exact);
            }
        }

        let lower_age = age_years.floor();
        let upper_age = age_years.ceil();
        if lower_age != upper_age {
            let low = self.entry_at(lower_age as u32);
            let high = self.entry_at(upper_age as u32);
            if let (Some(low), Some(high)) = (low, high) {
                let fraction = age_years - lower_age;
                let low = low.for_sex(sex);
                let high = high.for_sex(sex);
                return resolved(
                    PercentileSet {
                        p5: lerp(low.p5, high.p5, fraction),
                        p85: lerp(low.p85, high.p85, fraction),
                        p95: lerp(low.p95, high.p95, fraction),
                    },
                    Resolution::Interpolated,
                );
            }
        }

        let nearest = self.nearest_entry(age_years);
        log::debug!(
            "growth reference: no entry for age {age_years}, falling back to nearest age {}",
            nearest.age
        );
        resolved(nearest.for_sex(sex), Resolution::Nearest)
    }

    fn entry_at(&self, age: u32) -> Option<&ReferenceEntry> {
        self.entries.iter().find(|entry| entry.age == age)
    }

    // Strict `<` keeps the earlier row, so equidistant ties resolve to the lower age
    fn nearest_entry(&self, age_years: f64) -> &ReferenceEntry {
        self.entries.iter().fold(&self.entries[0], |best, entry| {
            let best_distance = (f64::from(best.age) - age_years).abs();
            let distance = (f64::from(entry.age) - age_years).abs();
            if distance < best_distance {
                entry
            } else {
                best
            }
        })
    }
}

fn resolved(set: PercentileSet, resolution: Resolution) -> ResolvedPercentiles {
    ResolvedPercentiles {
        p5: set.p5,
        p85: set.p85,
        p95: set.p95,
        resolution,
    }
}

fn lerp(low: f64, high: f64, fraction: f64) -> f64 {
    low + (high - low) * fraction
}
