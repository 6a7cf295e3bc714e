//! Create-dialog drafts and their validation.

use crate::model::source::SourceKind;
use crate::model::workflow::TriggerType;
use crate::model::zone::{Severity, ZoneStatus};
use crate::model::{RecordId, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;

static SOURCE_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[A-Za-z0-9.-]+(:\d+)?(/\S*)?$").expect("valid url regex"));

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

/// "Create Crisis Zone" dialog contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneDraft {
    pub name: String,
    pub region: String,
    pub country: String,
    pub description: String,
    pub severity: Severity,
    pub status: ZoneStatus,
}

impl Default for ZoneDraft {
    /// New zones start as medium-severity and under monitoring.
    fn default() -> Self {
        Self {
            name: String::new(),
            region: String::new(),
            country: String::new(),
            description: String::new(),
            severity: Severity::Medium,
            status: ZoneStatus::Monitoring,
        }
    }
}

impl ZoneDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name")?;
        require(&self.region, "region")?;
        require(&self.country, "country")
    }
}

/// "Add Data Source" dialog contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDraft {
    pub name: String,
    pub kind: SourceKind,
    pub url: String,
    pub api_key: Option<String>,
    pub crisis_zone_id: RecordId,
}

impl SourceDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name")?;
        require(&self.crisis_zone_id, "crisisZoneId")?;
        let url = self.url.trim();
        if !SOURCE_URL_RE.is_match(url) {
            return Err(ValidationError::InvalidUrl(url.to_string()));
        }
        Ok(())
    }
}

/// "Create Workflow" dialog contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowDraft {
    pub name: String,
    pub description: String,
    pub automation_id: String,
    pub trigger_type: TriggerType,
    pub crisis_zone_id: RecordId,
}

impl WorkflowDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name")?;
        require(&self.crisis_zone_id, "crisisZoneId")
    }
}

#[cfg(test)]
mod tests {
    use super::{SourceDraft, ZoneDraft};
    use crate::model::source::SourceKind;
    use crate::model::zone::{Severity, ZoneStatus};
    use crate::model::ValidationError;

    fn source_draft(url: &str) -> SourceDraft {
        SourceDraft {
            name: "Relief feed".to_string(),
            kind: SourceKind::Rss,
            url: url.to_string(),
            api_key: None,
            crisis_zone_id: "1".to_string(),
        }
    }

    #[test]
    fn zone_draft_defaults_and_required_fields() {
        let draft = ZoneDraft::default();
        assert_eq!(draft.severity, Severity::Medium);
        assert_eq!(draft.status, ZoneStatus::Monitoring);
        assert_eq!(draft.validate(), Err(ValidationError::EmptyField("name")));

        let draft = ZoneDraft {
            name: "Sahel".to_string(),
            region: "Africa".to_string(),
            country: "   ".to_string(),
            ..ZoneDraft::default()
        };
        assert_eq!(draft.validate(), Err(ValidationError::EmptyField("country")));
    }

    #[test]
    fn source_url_must_be_http() {
        assert!(source_draft("https://reliefweb.int/updates/rss.xml").validate().is_ok());
        assert!(source_draft("http://localhost:8080/feed").validate().is_ok());
        assert_eq!(
            source_draft("ftp://example.org").validate(),
            Err(ValidationError::InvalidUrl("ftp://example.org".to_string()))
        );
        assert!(source_draft("https://").validate().is_err());
    }
}
