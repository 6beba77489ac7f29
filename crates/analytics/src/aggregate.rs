use chrono::NaiveDate;
use core_types::{Aggregate, ChannelBucket, DailyBucket, Row};
use std::collections::BTreeMap;

/// Sums orders, units and revenue across all rows. Empty input yields zeros.
pub fn totals(rows: &[Row]) -> Aggregate {
    rows.iter().fold(Aggregate::zero(), |mut acc, row| {
        acc.add_row(row);
        acc
    })
}

/// One bucket per distinct date, ascending. Days without rows are not synthesized.
pub fn by_date(rows: &[Row]) -> Vec<DailyBucket> {
    let mut buckets: BTreeMap<NaiveDate, DailyBucket> = BTreeMap::new();
    for row in rows {
        buckets
            .entry(row.date)
            .or_insert_with(|| DailyBucket::empty(row.date))
            .add_row(row);
    }
    buckets.into_values().collect()
}

/// One bucket per distinct channel, in the order each channel first appears.
pub fn by_channel(rows: &[Row]) -> Vec<ChannelBucket> {
    // Accumulators stay in first-seen order; channel sets are a handful of entries.
    let mut buckets: Vec<ChannelBucket> = Vec::new();
    for row in rows {
        match buckets.iter_mut().find(|b| b.channel == row.channel) {
            Some(bucket) => bucket.add_row(row),
            None => {
                let mut bucket = ChannelBucket::empty(row.channel.clone());
                bucket.add_row(row);
                buckets.push(bucket);
            }
        }
    }
    buckets
}
