use crate::error::ConfigError;
use core_types::{Channel, RangeSelector};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section is optional in `config.toml`; missing sections take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dashboard: DashboardSettings,
    pub source: SourceSettings,
    pub logging: LoggingSettings,
    pub output: OutputSettings,
}

/// What the dashboard shows and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Every channel the dashboard knows about, in card order. All start active.
    pub channels: Vec<Channel>,
    /// The selector used when none is given on the command line.
    pub default_range: RangeSelector,
    /// Trailing days plotted in each KPI sparkline.
    pub sparkline_len: usize,
    /// Marker placed before formatted revenue figures.
    pub currency_symbol: String,
}

/// Where rows come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// A `.json` or `.csv` rows file. When absent the demo generator is used.
    pub path: Option<PathBuf>,
    /// Days of demo data, ending today.
    pub demo_days: u32,
    /// Seed for the demo generator.
    pub demo_seed: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// When set, logs also go to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

/// How the CLI renders a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

// --- Default Implementations ---
// These mirror the stock dashboard: four channels, a 30-day window and
// two-week sparklines.

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            channels: ["shopify", "myntra", "nykaa", "marketplace"]
                .into_iter()
                .map(Channel::from)
                .collect(),
            default_range: RangeSelector::Last30Days,
            sparkline_len: 14,
            currency_symbol: "₹".to_string(),
        }
    }
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            path: None,
            demo_days: 120,
            demo_seed: 123456,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl Config {
    /// Checks the invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dashboard = &self.dashboard;
        if dashboard.channels.is_empty() {
            return Err(ConfigError::ValidationError(
                "dashboard.channels must list at least one channel".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for channel in &dashboard.channels {
            if channel.as_str().trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "dashboard.channels contains an empty name".to_string(),
                ));
            }
            if !seen.insert(channel) {
                return Err(ConfigError::ValidationError(format!(
                    "dashboard.channels lists '{channel}' more than once"
                )));
            }
        }
        if dashboard.sparkline_len == 0 {
            return Err(ConfigError::ValidationError(
                "dashboard.sparkline_len must be at least 1".to_string(),
            ));
        }
        if self.source.demo_days == 0 {
            return Err(ConfigError::ValidationError(
                "source.demo_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
