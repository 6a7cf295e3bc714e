//! Single-record match evaluation.

use crate::filter::criteria::{Criteria, DateWindow, FacetFilter};
use crate::filter::record::{Filterable, TextField};
use crate::model::report::CredibilityBand;
use chrono::{DateTime, TimeZone, Utc};

/// Returns whether `record` satisfies every active criterion.
///
/// `now` anchors date windows; its time zone decides what "today" means.
pub fn matches<R, Tz>(record: &R, criteria: &Criteria, now: &DateTime<Tz>) -> bool
where
    R: Filterable + ?Sized,
    Tz: TimeZone,
{
    matches_text(record, criteria)
        && criteria
            .facets
            .iter()
            .all(|facet| matches_facet(record, facet))
        && criteria
            .credibility_band
            .map_or(true, |band| matches_band(record, band))
        && criteria
            .date_window
            .map_or(true, |window| matches_window(record, window, now))
}

fn matches_text<R: Filterable + ?Sized>(record: &R, criteria: &Criteria) -> bool {
    let Some(query) = criteria.text_query.as_deref() else {
        return true;
    };
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    let fields: &[TextField] = match criteria.text_fields.as_deref() {
        Some(fields) => fields,
        None => record.default_text_fields(),
    };

    fields.iter().any(|field| {
        record
            .text_values(*field)
            .into_iter()
            .any(|value| value.to_lowercase().contains(&needle))
    })
}

fn matches_facet<R: Filterable + ?Sized>(record: &R, facet: &FacetFilter) -> bool {
    if facet.choice.is_all() {
        return true;
    }
    record
        .facet_value(facet.field)
        .is_some_and(|value| value == facet.choice.as_str())
}

fn matches_band<R: Filterable + ?Sized>(record: &R, band: CredibilityBand) -> bool {
    record.credibility().is_some_and(|score| band.contains(score))
}

fn matches_window<R, Tz>(record: &R, window: DateWindow, now: &DateTime<Tz>) -> bool
where
    R: Filterable + ?Sized,
    Tz: TimeZone,
{
    let Some(timestamp) = record.timestamp() else {
        return false;
    };

    match window.trailing_span() {
        None => timestamp.with_timezone(&now.timezone()).date_naive() == now.date_naive(),
        Some(span) => {
            let now_utc = now.with_timezone(&Utc);
            timestamp <= now_utc && timestamp >= now_utc - span
        }
    }
}
