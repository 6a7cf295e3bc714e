//! Field access contract between records and the filter/aggregate engine.

use crate::model::alert::Alert;
use crate::model::report::Report;
use crate::model::source::DataSource;
use crate::model::workflow::Workflow;
use crate::model::zone::CrisisZone;
use chrono::{DateTime, Utc};

/// Free-text searchable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Title,
    Content,
    Tags,
    Source,
    Name,
    Region,
    Country,
    Description,
    Message,
    Url,
}

/// Enumerated fields usable as exact-match facets and `count_by` keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetField {
    Severity,
    Status,
    SourceType,
    SourceKind,
    TriggerType,
    CrisisZone,
    Breaking,
    Read,
    Active,
}

impl FacetField {
    pub const ALL: [Self; 9] = [
        Self::Severity,
        Self::Status,
        Self::SourceType,
        Self::SourceKind,
        Self::TriggerType,
        Self::CrisisZone,
        Self::Breaking,
        Self::Read,
        Self::Active,
    ];

    /// Wire field name, matching the record's serialized key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Severity => "severity",
            Self::Status => "status",
            Self::SourceType => "sourceType",
            Self::SourceKind => "type",
            Self::TriggerType => "triggerType",
            Self::CrisisZone => "crisisZoneId",
            Self::Breaking => "isBreaking",
            Self::Read => "isRead",
            Self::Active => "isActive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == value)
    }
}

/// Numeric fields usable by `sum`/`average`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    CredibilityScore,
    ErrorCount,
    TagCount,
}

/// Read-only field access used by predicates and aggregates.
///
/// Accessors return `None`/empty for fields a record does not carry, which
/// makes the corresponding criterion fail rather than error.
pub trait Filterable {
    /// Fields searched when criteria do not name any.
    fn default_text_fields(&self) -> &'static [TextField];

    fn text_values(&self, field: TextField) -> Vec<&str>;

    fn facet_value(&self, field: FacetField) -> Option<&str>;

    fn numeric_value(&self, _field: NumericField) -> Option<f64> {
        None
    }

    fn credibility(&self) -> Option<f64> {
        None
    }

    /// Instant used by date-window criteria.
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        None
    }
}

impl<T: Filterable + ?Sized> Filterable for &T {
    fn default_text_fields(&self) -> &'static [TextField] {
        (**self).default_text_fields()
    }

    fn text_values(&self, field: TextField) -> Vec<&str> {
        (**self).text_values(field)
    }

    fn facet_value(&self, field: FacetField) -> Option<&str> {
        (**self).facet_value(field)
    }

    fn numeric_value(&self, field: NumericField) -> Option<f64> {
        (**self).numeric_value(field)
    }

    fn credibility(&self) -> Option<f64> {
        (**self).credibility()
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        (**self).timestamp()
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

const ZONE_TEXT_FIELDS: &[TextField] = &[TextField::Name, TextField::Region, TextField::Country];
const REPORT_TEXT_FIELDS: &[TextField] = &[TextField::Title, TextField::Content, TextField::Source];
const ALERT_TEXT_FIELDS: &[TextField] = &[TextField::Title, TextField::Message];
const SOURCE_TEXT_FIELDS: &[TextField] = &[TextField::Name, TextField::Url];
const WORKFLOW_TEXT_FIELDS: &[TextField] = &[TextField::Name, TextField::Description];

impl Filterable for CrisisZone {
    fn default_text_fields(&self) -> &'static [TextField] {
        ZONE_TEXT_FIELDS
    }

    fn text_values(&self, field: TextField) -> Vec<&str> {
        match field {
            TextField::Name => vec![self.name.as_str()],
            TextField::Region => vec![self.region.as_str()],
            TextField::Country => vec![self.country.as_str()],
            TextField::Description => vec![self.description.as_str()],
            _ => Vec::new(),
        }
    }

    fn facet_value(&self, field: FacetField) -> Option<&str> {
        match field {
            FacetField::Severity => Some(self.severity.as_str()),
            FacetField::Status => Some(self.status.as_str()),
            FacetField::CrisisZone => Some(self.id.as_str()),
            _ => None,
        }
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.updated_at)
    }
}

impl Filterable for Report {
    fn default_text_fields(&self) -> &'static [TextField] {
        REPORT_TEXT_FIELDS
    }

    fn text_values(&self, field: TextField) -> Vec<&str> {
        match field {
            TextField::Title => vec![self.title.as_str()],
            TextField::Content => vec![self.content.as_str()],
            TextField::Source => vec![self.source.as_str()],
            TextField::Tags => self.tags.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    fn facet_value(&self, field: FacetField) -> Option<&str> {
        match field {
            FacetField::SourceType => Some(self.source_type.as_str()),
            FacetField::CrisisZone => Some(self.crisis_zone_id.as_str()),
            FacetField::Breaking => Some(bool_str(self.is_breaking)),
            _ => None,
        }
    }

    fn numeric_value(&self, field: NumericField) -> Option<f64> {
        match field {
            NumericField::CredibilityScore => Some(self.credibility_score.value()),
            NumericField::TagCount => Some(self.tags.len() as f64),
            NumericField::ErrorCount => None,
        }
    }

    fn credibility(&self) -> Option<f64> {
        Some(self.credibility_score.value())
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.timestamp)
    }
}

impl Filterable for Alert {
    fn default_text_fields(&self) -> &'static [TextField] {
        ALERT_TEXT_FIELDS
    }

    fn text_values(&self, field: TextField) -> Vec<&str> {
        match field {
            TextField::Title => vec![self.title.as_str()],
            TextField::Message => vec![self.message.as_str()],
            _ => Vec::new(),
        }
    }

    fn facet_value(&self, field: FacetField) -> Option<&str> {
        match field {
            FacetField::Severity => Some(self.severity.as_str()),
            FacetField::CrisisZone => Some(self.crisis_zone_id.as_str()),
            FacetField::Read => Some(bool_str(self.is_read)),
            _ => None,
        }
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}

/// Raw connectors carry no `status` facet; it depends on thresholds and is
/// exposed through `view::sources::SourceRow`.
impl Filterable for DataSource {
    fn default_text_fields(&self) -> &'static [TextField] {
        SOURCE_TEXT_FIELDS
    }

    fn text_values(&self, field: TextField) -> Vec<&str> {
        match field {
            TextField::Name => vec![self.name.as_str()],
            TextField::Url => vec![self.url.as_str()],
            _ => Vec::new(),
        }
    }

    fn facet_value(&self, field: FacetField) -> Option<&str> {
        match field {
            FacetField::SourceKind => Some(self.kind.as_str()),
            FacetField::CrisisZone => Some(self.crisis_zone_id.as_str()),
            FacetField::Active => Some(bool_str(self.is_active)),
            _ => None,
        }
    }

    fn numeric_value(&self, field: NumericField) -> Option<f64> {
        match field {
            NumericField::ErrorCount => Some(f64::from(self.error_count)),
            _ => None,
        }
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.last_sync
    }
}

impl Filterable for Workflow {
    fn default_text_fields(&self) -> &'static [TextField] {
        WORKFLOW_TEXT_FIELDS
    }

    fn text_values(&self, field: TextField) -> Vec<&str> {
        match field {
            TextField::Name => vec![self.name.as_str()],
            TextField::Description => vec![self.description.as_str()],
            _ => Vec::new(),
        }
    }

    fn facet_value(&self, field: FacetField) -> Option<&str> {
        match field {
            FacetField::Status => Some(self.status().as_str()),
            FacetField::TriggerType => Some(self.trigger_type.as_str()),
            FacetField::CrisisZone => Some(self.crisis_zone_id.as_str()),
            FacetField::Active => Some(bool_str(self.is_active)),
            _ => None,
        }
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.last_run
    }
}
