use crate::structs::DailyBucket;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The symbolic date-range choices offered by the dashboard controls.
///
/// Parsing is permissive: anything that is not `"today"` or `"7d"` resolves to
/// `Last30Days`, so a stale or hand-edited value never breaks a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RangeSelector {
    Today,
    Last7Days,
    #[default]
    Last30Days,
}

impl RangeSelector {
    /// Parses a selector key, falling back to `Last30Days` for unknown input.
    ///
    /// Keys match exactly; `" 7d "` or `"7D"` is unknown.
    pub fn parse(key: &str) -> Self {
        match key {
            "today" => RangeSelector::Today,
            "7d" => RangeSelector::Last7Days,
            "30d" => RangeSelector::Last30Days,
            other => {
                tracing::warn!(selector = other, "Unknown range selector, using 30d.");
                RangeSelector::Last30Days
            }
        }
    }

    /// The key used by the controls and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeSelector::Today => "today",
            RangeSelector::Last7Days => "7d",
            RangeSelector::Last30Days => "30d",
        }
    }

    /// The nominal window length in days, before clamping to available data.
    pub fn nominal_days(&self) -> u32 {
        match self {
            RangeSelector::Today => 1,
            RangeSelector::Last7Days => 7,
            RangeSelector::Last30Days => 30,
        }
    }
}

impl From<&str> for RangeSelector {
    fn from(key: &str) -> Self {
        Self::parse(key)
    }
}

impl From<String> for RangeSelector {
    fn from(key: String) -> Self {
        Self::parse(&key)
    }
}

impl From<RangeSelector> for String {
    fn from(selector: RangeSelector) -> Self {
        selector.as_str().to_string()
    }
}

impl fmt::Display for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A per-day metric that can be plotted as a sparkline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Orders,
    Units,
    Revenue,
    Aov,
}

impl Metric {
    /// Reads this metric off a daily bucket. AOV is derived as revenue per order.
    pub fn value_of(&self, bucket: &DailyBucket) -> Decimal {
        match self {
            Metric::Orders => Decimal::from(bucket.orders),
            Metric::Units => Decimal::from(bucket.units),
            Metric::Revenue => bucket.revenue,
            Metric::Aov => bucket.aov(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Orders => "Orders",
            Metric::Units => "Units",
            Metric::Revenue => "Revenue",
            Metric::Aov => "AOV",
        }
    }
}
