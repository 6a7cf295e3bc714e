//! Typed records for crisis monitoring views.
//!
//! # Responsibility
//! - Define the closed enumerations and flat records every page renders.
//! - Reject out-of-range values at construction and deserialization time.
//!
//! # Invariants
//! - Every enumeration is closed; wire names are lowercase snake_case.
//! - `CredibilityScore` always holds a finite value within `[0, 1]`.
//! - Records are immutable inputs to filter/aggregate passes.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod alert;
pub mod dataset;
pub mod report;
pub mod sample;
pub mod source;
pub mod user;
pub mod workflow;
pub mod zone;

/// Stable record identifier as supplied by the upstream collaborator.
pub type RecordId = String;

/// Record kinds, used in store outcomes and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Zone,
    Report,
    Alert,
    Source,
    Workflow,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Zone => "crisis_zone",
            Self::Report => "report",
            Self::Alert => "alert",
            Self::Source => "data_source",
            Self::Workflow => "workflow",
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record-level validation failures.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Credibility score is NaN or outside `[0, 1]`.
    CredibilityOutOfRange(f64),
    /// Required text field is blank after trimming.
    EmptyField(&'static str),
    /// Data source URL is not an absolute `http(s)` URL.
    InvalidUrl(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CredibilityOutOfRange(value) => {
                write!(f, "credibility score {value} must be within [0, 1]")
            }
            Self::EmptyField(field) => write!(f, "{field} must not be empty"),
            Self::InvalidUrl(value) => write!(f, "invalid source url `{value}`"),
        }
    }
}

impl Error for ValidationError {}
