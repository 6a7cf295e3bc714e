//! Data-source connectors and their derived health status.
//!
//! # Invariants
//! - A disabled connector is always `inactive`, regardless of error count.
//! - `warning_errors <= inactive_errors` for any validated threshold pair.

use crate::model::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Connector protocol family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Rss,
    Api,
    Osint,
    Social,
    News,
}

impl SourceKind {
    pub const ALL: [Self; 5] = [Self::Rss, Self::Api, Self::Osint, Self::Social, Self::News];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rss => "rss",
            Self::Api => "api",
            Self::Osint => "osint",
            Self::Social => "social",
            Self::News => "news",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

/// Connector health as shown on the Data Sources page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceStatus {
    Active,
    Inactive,
    Warning,
}

impl SourceStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::Warning];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Warning => "warning",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

/// Error-count thresholds used to derive [`SourceStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceHealthThresholds {
    /// Errors at or above this count mark an enabled source as `warning`.
    pub warning_errors: u32,
    /// Errors at or above this count mark a source as `inactive`.
    pub inactive_errors: u32,
}

impl Default for SourceHealthThresholds {
    fn default() -> Self {
        Self {
            warning_errors: 3,
            inactive_errors: 10,
        }
    }
}

/// External feed or API that supplies reports for a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub url: String,
    /// Never serialized back out.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    pub is_active: bool,
    pub crisis_zone_id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<DateTime<Utc>>,
    #[serde(default)]
    pub error_count: u32,
    pub created_at: DateTime<Utc>,
}

impl DataSource {
    pub fn status(&self, thresholds: &SourceHealthThresholds) -> SourceStatus {
        if !self.is_active || self.error_count >= thresholds.inactive_errors {
            SourceStatus::Inactive
        } else if self.error_count >= thresholds.warning_errors {
            SourceStatus::Warning
        } else {
            SourceStatus::Active
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DataSource, SourceHealthThresholds, SourceKind, SourceStatus};
    use chrono::{TimeZone, Utc};

    fn source(is_active: bool, error_count: u32) -> DataSource {
        DataSource {
            id: "s".to_string(),
            name: "feed".to_string(),
            kind: SourceKind::Rss,
            url: "https://example.org/feed".to_string(),
            api_key: None,
            is_active,
            crisis_zone_id: "1".to_string(),
            last_sync: None,
            error_count,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn status_follows_error_thresholds() {
        let thresholds = SourceHealthThresholds::default();
        assert_eq!(source(true, 0).status(&thresholds), SourceStatus::Active);
        assert_eq!(source(true, 2).status(&thresholds), SourceStatus::Active);
        assert_eq!(source(true, 3).status(&thresholds), SourceStatus::Warning);
        assert_eq!(source(true, 9).status(&thresholds), SourceStatus::Warning);
        assert_eq!(source(true, 10).status(&thresholds), SourceStatus::Inactive);
    }

    #[test]
    fn disabled_source_is_inactive_even_without_errors() {
        let thresholds = SourceHealthThresholds::default();
        assert_eq!(source(false, 0).status(&thresholds), SourceStatus::Inactive);
    }

    #[test]
    fn api_key_is_not_serialized() {
        let mut record = source(true, 0);
        record.api_key = Some("secret".to_string());
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("apiKey").is_none());
        assert_eq!(json["type"], "rss");
    }
}
