use core_types::{Channel, DateRange, Row};

/// Selects the rows whose channel is active and whose date falls inside `range`.
///
/// Input order is preserved. An empty channel set simply matches nothing.
pub fn filter_rows(rows: &[Row], channels: &[Channel], range: &DateRange) -> Vec<Row> {
    let filtered: Vec<Row> = rows
        .iter()
        .filter(|row| channels.contains(&row.channel) && range.contains(row.date))
        .cloned()
        .collect();

    tracing::debug!(
        input = rows.len(),
        matched = filtered.len(),
        %range,
        "Filtered rows."
    );
    filtered
}
