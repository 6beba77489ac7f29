//! # Commerce Pulse Core Types
//!
//! The shared vocabulary of the dashboard: the `Row` fact record, the derived
//! aggregates built from it, and the few enums the controls speak in.
//!
//! This is Layer 0. It holds no aggregation logic and depends on nothing else
//! in the workspace.

pub mod clock;
pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use clock::{Clock, FixedClock, SystemClock};
pub use enums::{Metric, RangeSelector};
pub use error::CoreError;
pub use structs::{Aggregate, Channel, ChannelBucket, DailyBucket, DateRange, Delta, Row};
