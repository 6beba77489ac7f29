//! # Commerce Pulse Analytics Engine
//!
//! This crate turns flat transaction rows into everything the dashboard shows:
//! KPI totals, per-day and per-channel buckets, period-over-period deltas and
//! chart-ready series.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files,
//!   terminals or configuration. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Every operation is a pure function of its inputs.
//!   The only time dependency, "today", comes in through an injected `Clock`.
//!
//! ## Public API
//!
//! - `resolve` / `prior_range_of`: selector to concrete date windows.
//! - `filter_rows`: channel and date-range selection.
//! - `totals` / `by_date` / `by_channel`: the aggregator.
//! - `delta`: the period-over-period comparator.
//! - `DashboardEngine` and `DashboardReport`: the whole pipeline in one call.
//! - `format_inr` and friends: display transforms for labels.

// Declare the modules that constitute this crate.
pub mod aggregate;
pub mod compare;
pub mod engine;
pub mod error;
pub mod filter;
pub mod format;
pub mod range;
pub mod report;
pub mod selection;
pub mod views;

// Re-export the key components to create a clean, public-facing API.
pub use aggregate::{by_channel, by_date, totals};
pub use compare::{delta, pct};
pub use engine::DashboardEngine;
pub use error::AnalyticsError;
pub use filter::filter_rows;
pub use format::{delta_label, format_currency, format_indian_number, format_inr, format_inr_opt};
pub use range::{earliest_date, prior_range_of, resolve};
pub use report::{ChannelCard, DashboardReport};
pub use selection::Selection;
pub use views::{
    ChannelRevenue, SeriesPoint, Sparklines, StackedPoint, channel_share, revenue_series, sparkline,
    stacked_series,
};
