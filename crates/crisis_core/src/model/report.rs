//! Field reports and credibility scoring.
//!
//! # Invariants
//! - `CredibilityScore` is finite and within `[0, 1]`.
//! - Bands are exhaustive and exclusive: high from 0.8, medium from 0.5.

use crate::model::{RecordId, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the high credibility band.
pub const HIGH_CREDIBILITY_MIN: f64 = 0.8;
/// Lower bound (inclusive) of the medium credibility band.
pub const MEDIUM_CREDIBILITY_MIN: f64 = 0.5;

/// Verification status of a report's source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Verified,
    Unverified,
    Rumor,
}

impl SourceType {
    pub const ALL: [Self; 3] = [Self::Verified, Self::Unverified, Self::Rumor];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Unverified => "unverified",
            Self::Rumor => "rumor",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

/// Discrete credibility grade derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredibilityBand {
    Low,
    Medium,
    High,
}

impl CredibilityBand {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Maps a score to its band. 0.8 is high, 0.5 is medium.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_CREDIBILITY_MIN {
            Self::High
        } else if score >= MEDIUM_CREDIBILITY_MIN {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn contains(self, score: f64) -> bool {
        Self::from_score(score) == self
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|band| band.as_str() == value)
    }
}

/// Credibility score in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct CredibilityScore(f64);

impl CredibilityScore {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::CredibilityOutOfRange(value))
        }
    }

    /// Clamps into `[0, 1]`; NaN becomes `0`.
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn band(self) -> CredibilityBand {
        CredibilityBand::from_score(self.0)
    }

    /// Whole-percent label, e.g. `0.95` -> `"95%"`.
    pub fn percent_label(self) -> String {
        format!("{}%", (self.0 * 100.0).round() as u32)
    }
}

impl TryFrom<f64> for CredibilityScore {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CredibilityScore> for f64 {
    fn from(value: CredibilityScore) -> Self {
        value.0
    }
}

/// A single intelligence report attached to a crisis zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    pub source: String,
    pub source_type: SourceType,
    pub credibility_score: CredibilityScore,
    pub crisis_zone_id: RecordId,
    #[serde(default)]
    pub tags: Vec<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_breaking: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_reports: Vec<RecordId>,
}

impl Report {
    pub fn credibility_band(&self) -> CredibilityBand {
        self.credibility_score.band()
    }

    pub fn is_verified(&self) -> bool {
        self.source_type == SourceType::Verified
    }
}

#[cfg(test)]
mod tests {
    use super::{CredibilityBand, CredibilityScore};
    use crate::model::ValidationError;

    #[test]
    fn band_edges_are_closed_at_lower_bound() {
        assert_eq!(CredibilityBand::from_score(0.8), CredibilityBand::High);
        assert_eq!(CredibilityBand::from_score(0.7999), CredibilityBand::Medium);
        assert_eq!(CredibilityBand::from_score(0.5), CredibilityBand::Medium);
        assert_eq!(CredibilityBand::from_score(0.4999), CredibilityBand::Low);
        assert_eq!(CredibilityBand::from_score(0.0), CredibilityBand::Low);
        assert_eq!(CredibilityBand::from_score(1.0), CredibilityBand::High);
    }

    #[test]
    fn every_score_falls_in_exactly_one_band() {
        for step in 0..=1000 {
            let score = f64::from(step) / 1000.0;
            let hits = CredibilityBand::ALL
                .into_iter()
                .filter(|band| band.contains(score))
                .count();
            assert_eq!(hits, 1, "score {score} matched {hits} bands");
        }
    }

    #[test]
    fn score_rejects_out_of_range_values() {
        assert_eq!(
            CredibilityScore::new(1.2),
            Err(ValidationError::CredibilityOutOfRange(1.2))
        );
        assert!(CredibilityScore::new(-0.01).is_err());
        assert!(CredibilityScore::new(f64::NAN).is_err());
    }

    #[test]
    fn percent_label_rounds_to_whole_percent() {
        let score = CredibilityScore::new(0.675).expect("in range");
        assert_eq!(score.percent_label(), "68%");
    }
}
