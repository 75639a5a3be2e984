//! UV index value object and its exposure buckets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exposure bucket for a UV index reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UvLevel {
    /// 2 and below
    Low,
    /// Above 2, up to 5
    Moderate,
    /// Above 5, up to 7
    High,
    /// Above 7
    VeryHigh,
}

impl UvLevel {
    /// Human-readable status label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for UvLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Daily maximum UV index as reported by the forecast service
///
/// Readings are not range-checked: the service occasionally reports
/// fractional values above 11 and those still belong to `VeryHigh`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UvIndex(f64);

impl UvIndex {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Bucket the reading; each upper bound is inclusive
    #[must_use]
    pub fn level(self) -> UvLevel {
        if self.0 <= 2.0 {
            UvLevel::Low
        } else if self.0 <= 5.0 {
            UvLevel::Moderate
        } else if self.0 <= 7.0 {
            UvLevel::High
        } else {
            UvLevel::VeryHigh
        }
    }
}

impl fmt::Display for UvIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
