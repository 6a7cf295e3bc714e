//! Data Sources page: connector list with derived health.

use crate::aggregate::{count_by, format_percentage, share, sum, Tally};
use crate::filter::{
    filter_refs, Criteria, FacetChoice, FacetField, Filterable, NumericField, TextField,
};
use crate::model::dataset::Dataset;
use crate::model::source::{DataSource, SourceHealthThresholds, SourceStatus};
use chrono::{DateTime, TimeZone, Utc};

/// A connector paired with its derived status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRow<'a> {
    pub source: &'a DataSource,
    pub status: SourceStatus,
}

impl<'a> SourceRow<'a> {
    pub fn new(source: &'a DataSource, thresholds: &SourceHealthThresholds) -> Self {
        Self {
            source,
            status: source.status(thresholds),
        }
    }
}

impl Filterable for SourceRow<'_> {
    fn default_text_fields(&self) -> &'static [TextField] {
        self.source.default_text_fields()
    }

    fn text_values(&self, field: TextField) -> Vec<&str> {
        self.source.text_values(field)
    }

    fn facet_value(&self, field: FacetField) -> Option<&str> {
        match field {
            FacetField::Status => Some(self.status.as_str()),
            other => self.source.facet_value(other),
        }
    }

    fn numeric_value(&self, field: NumericField) -> Option<f64> {
        self.source.numeric_value(field)
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.source.timestamp()
    }
}

/// Derives rows for every connector, in dataset order.
pub fn source_rows<'a>(
    sources: &'a [DataSource],
    thresholds: &SourceHealthThresholds,
) -> Vec<SourceRow<'a>> {
    sources
        .iter()
        .map(|source| SourceRow::new(source, thresholds))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourcesState {
    pub query: String,
    pub kind: FacetChoice,
    pub status: FacetChoice,
}

impl SourcesState {
    pub fn criteria(&self) -> Criteria {
        Criteria::new()
            .with_text(self.query.clone())
            .with_facet_choice(FacetField::SourceKind, self.kind.clone())
            .with_facet_choice(FacetField::Status, self.status.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourcesView<'a> {
    pub rows: Vec<SourceRow<'a>>,
    /// Status counts over all connectors, before filtering.
    pub by_status: Tally,
    /// Status counts over the rows shown.
    pub shown_by_status: Tally,
    pub active_share: String,
    /// Sync errors summed over all connectors.
    pub error_total: u64,
    pub total: usize,
}

pub fn sources_view<'a, Tz: TimeZone>(
    data: &'a Dataset,
    state: &SourcesState,
    thresholds: &SourceHealthThresholds,
    now: &DateTime<Tz>,
) -> SourcesView<'a> {
    let all_rows = source_rows(&data.sources, thresholds);
    let by_status = count_by(&all_rows, FacetField::Status);
    let active_share = format_percentage(share(
        by_status.get(SourceStatus::Active.as_str()),
        all_rows.len(),
    ));

    let error_total = sum(&all_rows, NumericField::ErrorCount) as u64;

    let rows = filter_refs(&all_rows, &state.criteria(), now)
        .into_iter()
        .copied()
        .collect::<Vec<_>>();

    SourcesView {
        shown_by_status: count_by(&rows, FacetField::Status),
        by_status,
        active_share,
        error_total,
        total: all_rows.len(),
        rows,
    }
}
