use chrono::{Datelike, Days};
use core_types::{Channel, Clock, Row};
use rust_decimal::{Decimal, RoundingStrategy};

const PARK_MILLER_MODULUS: u64 = 2_147_483_647;
const PARK_MILLER_MULTIPLIER: u64 = 48_271;

/// Weekday demand multipliers, Sunday first.
const WEEKDAY_SEASONALITY: [f64; 7] = [0.95, 0.98, 1.0, 1.02, 1.04, 1.15, 1.18];

/// A deterministic generator of plausible commerce rows for demos and smoke tests.
///
/// It emits one row per channel per day for `days` days ending on the clock's
/// today, oldest first. The same seed and the same day always produce the same rows.
#[derive(Debug, Clone)]
pub struct DemoGenerator {
    days: u32,
    seed: u64,
    channels: Vec<Channel>,
}

impl DemoGenerator {
    pub fn new(days: u32, seed: u64) -> Self {
        Self {
            days,
            seed,
            channels: ["shopify", "myntra", "nykaa", "marketplace"]
                .into_iter()
                .map(Channel::from)
                .collect(),
        }
    }

    pub fn with_channels(mut self, channels: Vec<Channel>) -> Self {
        self.channels = channels;
        self
    }

    pub fn generate<C: Clock + ?Sized>(&self, clock: &C) -> Vec<Row> {
        let today = clock.today();
        let mut rand = ParkMiller::new(self.seed);
        let mut rows = Vec::with_capacity(self.days as usize * self.channels.len());
        let span = f64::from(self.days);

        for i in (0..self.days).rev() {
            let Some(date) = today.checked_sub_days(Days::new(u64::from(i))) else {
                continue;
            };
            let season = WEEKDAY_SEASONALITY[date.weekday().num_days_from_sunday() as usize];

            for channel in &self.channels {
                let profile = ChannelProfile::of(channel);
                let weight = profile.weight * (0.9 + rand.next_f64() * 0.2);
                // Older days sit slightly higher, with noise on top.
                let trend = 0.92 + (f64::from(i) / span) * 0.05 + rand.next_f64() * 0.08;

                let orders = (60.0 * weight * season * trend + rand.next_f64() * 10.0)
                    .round()
                    .max(5.0);
                let units = (orders * (1.4 + rand.next_f64() * 0.8)).round().max(6.0);
                let aov = profile.aov_base * (0.9 + rand.next_f64() * 0.3);
                let revenue = orders * aov * (0.95 + rand.next_f64() * 0.1);

                rows.push(Row {
                    date,
                    channel: channel.clone(),
                    orders: orders as u64,
                    units: units as u64,
                    revenue: Decimal::try_from(revenue)
                        .unwrap_or_default()
                        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
                });
            }
        }

        tracing::info!(
            days = self.days,
            seed = self.seed,
            rows = rows.len(),
            until = %today,
            "Generated demo rows."
        );
        rows
    }
}

/// Baseline share of demand and typical order value per channel.
struct ChannelProfile {
    weight: f64,
    aov_base: f64,
}

impl ChannelProfile {
    fn of(channel: &Channel) -> Self {
        let (weight, aov_base) = match channel.as_str() {
            "shopify" => (0.38, 2200.0),
            "myntra" => (0.24, 1600.0),
            "nykaa" => (0.18, 1400.0),
            "marketplace" => (0.20, 1800.0),
            _ => (0.20, 1500.0),
        };
        Self { weight, aov_base }
    }
}

/// The Park–Miller minimal-standard LCG, yielding values in [0, 1).
struct ParkMiller {
    state: u64,
}

impl ParkMiller {
    fn new(seed: u64) -> Self {
        // A zero state would stay zero forever.
        let state = match seed % PARK_MILLER_MODULUS {
            0 => 1,
            s => s,
        };
        Self { state }
    }

    fn next_f64(&mut self) -> f64 {
        self.state = self.state * PARK_MILLER_MULTIPLIER % PARK_MILLER_MODULUS;
        (self.state - 1) as f64 / (PARK_MILLER_MODULUS - 1) as f64
    }
}
