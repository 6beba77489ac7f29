use crate::selection::Selection;
use crate::views::{ChannelRevenue, SeriesPoint, Sparklines, StackedPoint};
use core_types::{Aggregate, Channel, ChannelBucket, DailyBucket, DateRange, Delta};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Everything the presentation layer needs to draw one state of the dashboard.
///
/// This struct is the final output of the `DashboardEngine`. It is rebuilt from
/// scratch whenever the selection or the row source changes and is never mutated
/// by its consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub selection: Selection,

    // I. Windows
    pub range: DateRange,
    pub prior_range: DateRange,

    // II. KPIs
    pub totals: Aggregate,
    pub prior_totals: Aggregate,
    pub aov: Decimal,
    pub delta: Delta,

    // III. Buckets
    pub daily: Vec<DailyBucket>,
    pub channels: Vec<ChannelBucket>,

    // IV. Chart series
    pub sparklines: Sparklines,
    pub revenue_series: Vec<SeriesPoint>,
    pub stacked: Vec<StackedPoint>,
    pub share: Vec<ChannelRevenue>,
}

/// A per-channel summary card. Inactive or silent channels still get a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelCard {
    pub channel: Channel,
    pub display_name: String,
    pub palette: String,
    pub active: bool,
    pub orders: u64,
    pub units: u64,
    pub revenue: Decimal,
}

impl DashboardReport {
    /// One card per channel in `all_channels`, in that order, zero-filled when
    /// the channel has no rows in the current window.
    pub fn channel_cards(&self, all_channels: &[Channel]) -> Vec<ChannelCard> {
        all_channels
            .iter()
            .map(|channel| {
                let bucket = self
                    .channels
                    .iter()
                    .find(|b| &b.channel == channel)
                    .cloned()
                    .unwrap_or_else(|| ChannelBucket::empty(channel.clone()));
                ChannelCard {
                    channel: channel.clone(),
                    display_name: channel.display_name(),
                    palette: channel.palette().to_string(),
                    active: self.selection.is_active(channel),
                    orders: bucket.orders,
                    units: bucket.units,
                    revenue: bucket.revenue,
                }
            })
            .collect()
    }
}
