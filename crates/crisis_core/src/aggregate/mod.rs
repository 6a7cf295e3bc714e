//! Summary statistics for stat cards and summary panels.
//!
//! # Invariants
//! - Pure functions; no input is mutated.
//! - Division by zero never escapes: `average` reports `None`, `percentage`
//!   reports `0.0` (rendered `"0.0%"`).

pub mod tally;

pub use tally::Tally;

use crate::filter::record::{FacetField, Filterable, NumericField};

/// Counts records per facet value in first-seen order.
///
/// Records that do not carry `field` are skipped.
pub fn count_by<'a, R, I>(records: I, field: FacetField) -> Tally
where
    R: Filterable + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut tally = Tally::new();
    for record in records {
        if let Some(value) = record.facet_value(field) {
            tally.record(value);
        }
    }
    tally
}

pub fn count_where<R, P>(records: &[R], predicate: P) -> usize
where
    P: Fn(&R) -> bool,
{
    records.iter().filter(|record| predicate(*record)).count()
}

/// Sum of `field` over records that carry it; `0.0` when none do.
pub fn sum<'a, R, I>(records: I, field: NumericField) -> f64
where
    R: Filterable + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records
        .into_iter()
        .filter_map(|record| record.numeric_value(field))
        .sum()
}

/// Mean of `field` over records that carry it; `None` means "no data".
pub fn average<'a, R, I>(records: I, field: NumericField) -> Option<f64>
where
    R: Filterable + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let (total, count) = records
        .into_iter()
        .filter_map(|record| record.numeric_value(field))
        .fold((0.0_f64, 0_usize), |(total, count), value| {
            (total + value, count + 1)
        });

    if count == 0 {
        None
    } else {
        Some(total / count as f64)
    }
}

/// `numerator / denominator * 100`, or `0.0` for a zero denominator.
pub fn percentage(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 || !denominator.is_finite() || !numerator.is_finite() {
        return 0.0;
    }
    numerator / denominator * 100.0
}

/// Percentage of `part` within `whole` counts.
pub fn share(part: usize, whole: usize) -> f64 {
    percentage(part as f64, whole as f64)
}

/// One-decimal display form, e.g. `"66.7%"`.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}

/// Display form for an optional average; `"N/A"` for no data.
pub fn format_average(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.2}"),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{average, format_average, format_percentage, percentage, share, sum};
    use crate::filter::record::NumericField;
    use crate::model::sample::sample_dataset;
    use chrono::{TimeZone, Utc};

    #[test]
    fn sum_adds_fields_the_records_carry() {
        let data = sample_dataset(Utc.with_ymd_and_hms(2024, 6, 15, 18, 0, 0).unwrap());

        assert_eq!(sum(&data.sources, NumericField::ErrorCount), 5.0);
        // Sources carry no credibility score.
        assert_eq!(sum(&data.sources, NumericField::CredibilityScore), 0.0);
        assert_eq!(sum(&data.sources[..0], NumericField::ErrorCount), 0.0);
    }

    #[test]
    fn average_of_nothing_is_no_data() {
        let data = sample_dataset(Utc.with_ymd_and_hms(2024, 6, 15, 18, 0, 0).unwrap());

        assert_eq!(average(&data.reports[..0], NumericField::CredibilityScore), None);
        assert_eq!(average(&data.zones, NumericField::ErrorCount), None);
        assert_eq!(average(&data.sources, NumericField::ErrorCount), Some(1.0));
    }

    #[test]
    fn percentage_guards_zero_denominator() {
        assert_eq!(percentage(0.0, 0.0), 0.0);
        assert_eq!(percentage(5.0, 0.0), 0.0);
        assert_eq!(format_percentage(percentage(0.0, 0.0)), "0.0%");
    }

    #[test]
    fn share_rounds_to_one_decimal_for_display() {
        assert_eq!(format_percentage(share(2, 3)), "66.7%");
        assert_eq!(format_percentage(share(3, 3)), "100.0%");
    }

    #[test]
    fn missing_average_renders_as_not_available() {
        assert_eq!(format_average(None), "N/A");
        assert_eq!(format_average(Some(0.5)), "0.50");
    }
}
