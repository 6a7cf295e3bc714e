//! Order-preserving collection filter.

use crate::filter::criteria::Criteria;
use crate::filter::predicate::matches;
use crate::filter::record::Filterable;
use chrono::{DateTime, TimeZone};
use log::debug;

/// Returns references to matching records in input order.
pub fn filter_refs<'a, R, Tz>(
    records: &'a [R],
    criteria: &Criteria,
    now: &DateTime<Tz>,
) -> Vec<&'a R>
where
    R: Filterable,
    Tz: TimeZone,
{
    if criteria.is_unconstrained() {
        return records.iter().collect();
    }

    let matched = records
        .iter()
        .filter(|record| matches(*record, criteria, now))
        .collect::<Vec<_>>();

    debug!(
        "event=filter_applied module=filter total={} matched={}",
        records.len(),
        matched.len()
    );
    matched
}

/// Owned variant of [`filter_refs`].
pub fn filter_records<R, Tz>(records: &[R], criteria: &Criteria, now: &DateTime<Tz>) -> Vec<R>
where
    R: Filterable + Clone,
    Tz: TimeZone,
{
    filter_refs(records, criteria, now)
        .into_iter()
        .cloned()
        .collect()
}
