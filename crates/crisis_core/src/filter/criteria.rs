//! Filter criteria as selected in page controls.

use crate::filter::record::{FacetField, TextField};
use crate::model::report::CredibilityBand;
use chrono::Duration;

/// Select-box value meaning "no constraint".
pub const ALL_SENTINEL: &str = "all";

/// One facet selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FacetChoice {
    #[default]
    All,
    /// Exact, case-sensitive wire value.
    Only(String),
}

impl FacetChoice {
    /// Maps the `"all"` sentinel to [`FacetChoice::All`]; any other value is
    /// kept verbatim, including values no record can carry.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SENTINEL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_SENTINEL,
            Self::Only(value) => value.as_str(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetFilter {
    pub field: FacetField,
    pub choice: FacetChoice,
}

/// Trailing time window relative to the evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateWindow {
    /// Same local calendar date as the evaluation instant.
    Today,
    /// Trailing 7×24 hours.
    Week,
    /// Trailing 30×24 hours.
    Month,
}

impl DateWindow {
    pub const ALL: [Self; 3] = [Self::Today, Self::Week, Self::Month];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|window| window.as_str() == value)
    }

    /// Trailing span for rolling windows; `None` for calendar-day matching.
    pub fn trailing_span(self) -> Option<Duration> {
        match self {
            Self::Today => None,
            Self::Week => Some(Duration::hours(7 * 24)),
            Self::Month => Some(Duration::hours(30 * 24)),
        }
    }
}

/// Active criteria for one filter pass. `Default` matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    pub text_query: Option<String>,
    /// Overrides the record type's default searchable fields.
    pub text_fields: Option<Vec<TextField>>,
    pub facets: Vec<FacetFilter>,
    pub credibility_band: Option<CredibilityBand>,
    pub date_window: Option<DateWindow>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, query: impl Into<String>) -> Self {
        self.text_query = Some(query.into());
        self
    }

    pub fn with_text_fields(mut self, fields: &[TextField]) -> Self {
        self.text_fields = Some(fields.to_vec());
        self
    }

    /// Adds a facet from a select-box value; `"all"` adds no constraint.
    pub fn with_facet(mut self, field: FacetField, value: &str) -> Self {
        self.facets.push(FacetFilter {
            field,
            choice: FacetChoice::parse(value),
        });
        self
    }

    pub fn with_facet_choice(mut self, field: FacetField, choice: FacetChoice) -> Self {
        self.facets.push(FacetFilter { field, choice });
        self
    }

    pub fn with_band(mut self, band: Option<CredibilityBand>) -> Self {
        self.credibility_band = band;
        self
    }

    pub fn with_window(mut self, window: Option<DateWindow>) -> Self {
        self.date_window = window;
        self
    }

    /// True when no criterion constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.text_query.as_deref().map_or(true, str::is_empty)
            && self.facets.iter().all(|facet| facet.choice.is_all())
            && self.credibility_band.is_none()
            && self.date_window.is_none()
    }
}
