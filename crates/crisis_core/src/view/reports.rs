//! Reports Archive page: search across historical reports.

use crate::aggregate::{
    average, count_by, count_where, format_average, format_percentage, share, Tally,
};
use crate::filter::{
    filter_refs, Criteria, DateWindow, FacetChoice, FacetField, NumericField, TextField,
};
use crate::model::dataset::Dataset;
use crate::model::report::{CredibilityBand, Report};
use chrono::{DateTime, TimeZone};

const ARCHIVE_TEXT_FIELDS: &[TextField] = &[
    TextField::Title,
    TextField::Content,
    TextField::Tags,
    TextField::Source,
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportsState {
    pub query: String,
    pub source_type: FacetChoice,
    pub crisis_zone: FacetChoice,
    pub band: Option<CredibilityBand>,
    pub window: Option<DateWindow>,
    pub breaking_only: bool,
}

impl ReportsState {
    pub fn criteria(&self) -> Criteria {
        let breaking = if self.breaking_only {
            FacetChoice::Only("true".to_string())
        } else {
            FacetChoice::All
        };

        Criteria::new()
            .with_text(self.query.clone())
            .with_text_fields(ARCHIVE_TEXT_FIELDS)
            .with_facet_choice(FacetField::SourceType, self.source_type.clone())
            .with_facet_choice(FacetField::CrisisZone, self.crisis_zone.clone())
            .with_facet_choice(FacetField::Breaking, breaking)
            .with_band(self.band)
            .with_window(self.window)
    }

    /// Resets every control to "no constraint".
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Summary panel over the matched reports.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveSummary {
    pub matched: usize,
    pub total: usize,
    pub by_source_type: Tally,
    pub by_band: Tally,
    pub average_credibility: Option<f64>,
    pub breaking: usize,
    /// One-decimal percentage of verified reports among matches.
    pub verified_share: String,
}

impl ArchiveSummary {
    pub fn average_label(&self) -> String {
        format_average(self.average_credibility)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportsView<'a> {
    pub reports: Vec<&'a Report>,
    pub summary: ArchiveSummary,
}

pub fn reports_view<'a, Tz: TimeZone>(
    data: &'a Dataset,
    state: &ReportsState,
    now: &DateTime<Tz>,
) -> ReportsView<'a> {
    let reports = filter_refs(&data.reports, &state.criteria(), now);

    let by_band = reports
        .iter()
        .map(|report| report.credibility_band().as_str())
        .collect::<Tally>();
    let verified = reports.iter().filter(|report| report.is_verified()).count();

    let summary = ArchiveSummary {
        matched: reports.len(),
        total: data.reports.len(),
        by_source_type: count_by(&reports, FacetField::SourceType),
        by_band,
        average_credibility: average(&reports, NumericField::CredibilityScore),
        breaking: count_where(&reports, |report| report.is_breaking),
        verified_share: format_percentage(share(verified, reports.len())),
    };

    ReportsView { reports, summary }
}
