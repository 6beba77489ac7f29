//! Chart-ready projections of the aggregator output.
//!
//! Nothing here normalizes or styles values; the widgets that consume these
//! series own that.

use chrono::NaiveDate;
use core_types::{Channel, ChannelBucket, DailyBucket, Metric, Row};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How many trailing days a KPI sparkline shows by default.
pub const DEFAULT_SPARKLINE_LEN: usize = 14;

/// A labelled point on a single-metric time series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// `MM-DD`.
    pub label: String,
    pub value: Decimal,
}

/// A channel paired with a revenue figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRevenue {
    pub channel: Channel,
    pub revenue: Decimal,
}

/// Raw per-channel revenue for one day of the 100%-stacked chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackedPoint {
    pub date: NaiveDate,
    pub label: String,
    /// One entry per active channel, in active-channel order.
    pub parts: Vec<ChannelRevenue>,
}

/// The trailing sparkline series for every KPI card.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sparklines {
    pub orders: Vec<Decimal>,
    pub units: Vec<Decimal>,
    pub revenue: Vec<Decimal>,
    pub aov: Vec<Decimal>,
}

impl Sparklines {
    pub fn from_daily(daily: &[DailyBucket], len: usize) -> Self {
        Self {
            orders: sparkline(daily, Metric::Orders, len),
            units: sparkline(daily, Metric::Units, len),
            revenue: sparkline(daily, Metric::Revenue, len),
            aov: sparkline(daily, Metric::Aov, len),
        }
    }

    pub fn get(&self, metric: Metric) -> &[Decimal] {
        match metric {
            Metric::Orders => &self.orders,
            Metric::Units => &self.units,
            Metric::Revenue => &self.revenue,
            Metric::Aov => &self.aov,
        }
    }
}

/// The last `len` daily values of `metric`, or all of them when fewer exist.
pub fn sparkline(daily: &[DailyBucket], metric: Metric, len: usize) -> Vec<Decimal> {
    let skip = daily.len().saturating_sub(len);
    daily[skip..].iter().map(|bucket| metric.value_of(bucket)).collect()
}

/// Daily revenue labelled by `MM-DD`, for the main time-series chart.
pub fn revenue_series(daily: &[DailyBucket]) -> Vec<SeriesPoint> {
    daily
        .iter()
        .map(|bucket| SeriesPoint {
            label: short_label(bucket.date),
            value: bucket.revenue,
        })
        .collect()
}

/// For each day in `daily` and each active channel, that channel's revenue on the day.
///
/// Channels with no rows on a day contribute zero.
pub fn stacked_series(rows: &[Row], daily: &[DailyBucket], channels: &[Channel]) -> Vec<StackedPoint> {
    let mut revenue: HashMap<(NaiveDate, &Channel), Decimal> = HashMap::new();
    for row in rows {
        *revenue.entry((row.date, &row.channel)).or_default() += row.revenue;
    }

    daily
        .iter()
        .map(|bucket| StackedPoint {
            date: bucket.date,
            label: short_label(bucket.date),
            parts: channels
                .iter()
                .map(|channel| ChannelRevenue {
                    channel: channel.clone(),
                    revenue: revenue
                        .get(&(bucket.date, channel))
                        .copied()
                        .unwrap_or(Decimal::ZERO),
                })
                .collect(),
        })
        .collect()
}

/// Total revenue composition by channel, as fed to the donut chart.
pub fn channel_share(buckets: &[ChannelBucket]) -> Vec<ChannelRevenue> {
    buckets
        .iter()
        .map(|bucket| ChannelRevenue {
            channel: bucket.channel.clone(),
            revenue: bucket.revenue,
        })
        .collect()
}

fn short_label(date: NaiveDate) -> String {
    date.format("%m-%d").to_string()
}
