use chrono::{Days, NaiveDate};
use core_types::{Clock, DateRange, RangeSelector, Row};

/// The earliest date present in the row source, if there are any rows.
pub fn earliest_date(rows: &[Row]) -> Option<NaiveDate> {
    rows.iter().map(|row| row.date).min()
}

/// Converts a symbolic selector into a concrete window ending today.
///
/// The window is `nominal_days` long, except that its start is raised to the
/// earliest date in `rows` when the data does not reach back that far. The
/// clock is read exactly once.
pub fn resolve<C: Clock + ?Sized>(selector: RangeSelector, rows: &[Row], clock: &C) -> DateRange {
    let today = clock.today();
    let lookback = Days::new(u64::from(selector.nominal_days()) - 1);
    let mut start = today.checked_sub_days(lookback).unwrap_or(NaiveDate::MIN);

    if let Some(earliest) = earliest_date(rows) {
        if start < earliest {
            // Data that only begins after today leaves nothing to show; keep the
            // range well-formed and let the filter come back empty.
            start = earliest.min(today);
        }
    }

    let range = DateRange::new(start, today).unwrap_or_else(|_| DateRange::single_day(today));
    tracing::debug!(%selector, %range, "Resolved date range.");
    range
}

/// The window of the same length that ends the day before `range` starts.
///
/// A clamped range yields a prior window of the clamped length.
pub fn prior_range_of(range: &DateRange) -> DateRange {
    let end = range
        .start()
        .checked_sub_days(Days::new(1))
        .unwrap_or(NaiveDate::MIN);
    let start = end
        .checked_sub_days(Days::new(range.days() - 1))
        .unwrap_or(NaiveDate::MIN);
    DateRange::new(start, end).unwrap_or_else(|_| DateRange::single_day(end))
}
