use crate::error::CoreError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A sales or distribution outlet, identified by its lower-case key (e.g. "shopify").
///
/// The set of channels is caller-defined; the dashboard only ever compares keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Channel(String);

impl Channel {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key with its first letter upper-cased, as shown on channel cards.
    pub fn display_name(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// The accent colour used for this channel in charts.
    pub fn palette(&self) -> &'static str {
        match self.0.as_str() {
            "shopify" => "#2BD2FF",
            "myntra" => "#FF3CAC",
            "nykaa" => "#5A00FF",
            "marketplace" => "#FF8A00",
            _ => "#A9B1D6",
        }
    }
}

impl From<&str> for Channel {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for Channel {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One channel's activity on one day. This is the only fact the dashboard ingests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub channel: Channel,
    pub orders: u64,
    pub units: u64,
    pub revenue: Decimal,
}

/// A closed interval of calendar days. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = CoreError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        DateRange::new(raw.start, raw.end)
    }
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered, both ends included. Always at least 1.
    pub fn days(&self) -> u64 {
        (self.end - self.start).num_days() as u64 + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

/// Orders, units and revenue summed over some collection of rows.
///
/// Sums saturate at the numeric limits instead of overflowing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Aggregate {
    pub orders: u64,
    pub units: u64,
    pub revenue: Decimal,
}

impl Aggregate {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, row: &Row) {
        self.orders = self.orders.saturating_add(row.orders);
        self.units = self.units.saturating_add(row.units);
        self.revenue = self.revenue.saturating_add(row.revenue);
    }

    /// Average order value. Zero when there are no orders.
    pub fn aov(&self) -> Decimal {
        average_order_value(self.revenue, self.orders)
    }
}

/// Totals for a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub orders: u64,
    pub units: u64,
    pub revenue: Decimal,
}

impl DailyBucket {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            orders: 0,
            units: 0,
            revenue: Decimal::ZERO,
        }
    }

    pub fn add_row(&mut self, row: &Row) {
        self.orders = self.orders.saturating_add(row.orders);
        self.units = self.units.saturating_add(row.units);
        self.revenue = self.revenue.saturating_add(row.revenue);
    }

    pub fn aov(&self) -> Decimal {
        average_order_value(self.revenue, self.orders)
    }
}

/// Totals for a single channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelBucket {
    pub channel: Channel,
    pub orders: u64,
    pub units: u64,
    pub revenue: Decimal,
}

impl ChannelBucket {
    pub fn empty(channel: Channel) -> Self {
        Self {
            channel,
            orders: 0,
            units: 0,
            revenue: Decimal::ZERO,
        }
    }

    pub fn add_row(&mut self, row: &Row) {
        self.orders = self.orders.saturating_add(row.orders);
        self.units = self.units.saturating_add(row.units);
        self.revenue = self.revenue.saturating_add(row.revenue);
    }
}

/// Period-over-period percentage changes. A field is zero when its prior value was zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Delta {
    pub orders_pct: Decimal,
    pub units_pct: Decimal,
    pub revenue_pct: Decimal,
    pub aov_pct: Decimal,
}

impl Delta {
    pub fn zero() -> Self {
        Self::default()
    }
}

fn average_order_value(revenue: Decimal, orders: u64) -> Decimal {
    if orders == 0 {
        return Decimal::ZERO;
    }
    revenue / Decimal::from(orders)
}
