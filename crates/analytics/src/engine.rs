use crate::aggregate::{by_channel, by_date, totals};
use crate::compare::delta;
use crate::error::AnalyticsError;
use crate::filter::filter_rows;
use crate::range::{prior_range_of, resolve};
use crate::report::DashboardReport;
use crate::selection::Selection;
use crate::views::{DEFAULT_SPARKLINE_LEN, Sparklines, channel_share, revenue_series, stacked_series};
use core_types::{Clock, Row};

/// A stateless calculator that turns raw rows and a selection into a `DashboardReport`.
#[derive(Debug, Clone)]
pub struct DashboardEngine {
    sparkline_len: usize,
}

impl Default for DashboardEngine {
    fn default() -> Self {
        Self {
            sparkline_len: DEFAULT_SPARKLINE_LEN,
        }
    }
}

impl DashboardEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine whose KPI sparklines show `len` trailing days.
    pub fn with_sparkline_len(len: usize) -> Result<Self, AnalyticsError> {
        if len == 0 {
            return Err(AnalyticsError::InvalidParameter(
                "sparkline_len".to_string(),
                "must be at least 1".to_string(),
            ));
        }
        Ok(Self { sparkline_len: len })
    }

    /// The main entry point for building a dashboard.
    ///
    /// # Arguments
    ///
    /// * `rows` - The full row source. It is never mutated.
    /// * `selection` - Active channels and the range selector.
    /// * `clock` - Supplies "today" for range resolution.
    ///
    /// # Returns
    ///
    /// A fully populated `DashboardReport`. An empty row source yields a report
    /// whose aggregates are all zero.
    #[tracing::instrument(
        name = "dashboard_calculate",
        skip_all,
        fields(range = %selection.range, channels = selection.channels.len(), rows = rows.len())
    )]
    pub fn calculate<C: Clock + ?Sized>(
        &self,
        rows: &[Row],
        selection: &Selection,
        clock: &C,
    ) -> DashboardReport {
        // 1. Windows
        let range = resolve(selection.range, rows, clock);
        let prior_range = prior_range_of(&range);

        // 2. Filter both periods with the same channel set
        let current_rows = filter_rows(rows, &selection.channels, &range);
        let prior_rows = filter_rows(rows, &selection.channels, &prior_range);

        // 3. Aggregate
        let current = totals(&current_rows);
        let prior = totals(&prior_rows);
        let daily = by_date(&current_rows);
        let channels = by_channel(&current_rows);

        // 4. Compare
        let delta = delta(&current, &prior);

        // 5. Chart views
        let sparklines = Sparklines::from_daily(&daily, self.sparkline_len);
        let revenue_series = revenue_series(&daily);
        let stacked = stacked_series(&current_rows, &daily, &selection.channels);
        let share = channel_share(&channels);

        tracing::info!(
            %range,
            %prior_range,
            orders = current.orders,
            revenue = %current.revenue,
            days = daily.len(),
            "Dashboard calculated."
        );

        DashboardReport {
            selection: selection.clone(),
            range,
            prior_range,
            aov: current.aov(),
            totals: current,
            prior_totals: prior,
            delta,
            daily,
            channels,
            sparklines,
            revenue_series,
            stacked,
            share,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use core_types::{Aggregate, Channel, Delta, FixedClock, RangeSelector};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(date: NaiveDate, channel: &str, orders: u64, units: u64, revenue: Decimal) -> Row {
        Row {
            date,
            channel: Channel::from(channel),
            orders,
            units,
            revenue,
        }
    }

    fn all_channels() -> Vec<Channel> {
        ["shopify", "myntra", "nykaa", "marketplace"]
            .iter()
            .map(|c| Channel::from(*c))
            .collect()
    }

    /// Fourteen days ending 2024-01-14; shopify sells 10/day in week one and 12/day in week two.
    fn two_weeks() -> Vec<Row> {
        let first = day(2024, 1, 1);
        let mut rows = Vec::new();
        for offset in 0..14 {
            let date = first.checked_add_days(Days::new(offset)).unwrap();
            let orders = if offset < 7 { 10 } else { 12 };
            rows.push(row(date, "shopify", orders, orders * 2, Decimal::from(orders * 100)));
            rows.push(row(date, "myntra", 5, 5, dec!(400)));
        }
        rows
    }

    #[test]
    fn single_day_scenario() {
        let rows = vec![
            row(day(2024, 1, 1), "shopify", 10, 15, dec!(1000)),
            row(day(2024, 1, 1), "myntra", 5, 8, dec!(500)),
        ];
        let selection = Selection::new(
            vec![Channel::from("shopify"), Channel::from("myntra")],
            RangeSelector::Today,
        );
        let report = DashboardEngine::new().calculate(&rows, &selection, &FixedClock(day(2024, 1, 1)));

        assert_eq!(report.range.start(), day(2024, 1, 1));
        assert_eq!(report.range.end(), day(2024, 1, 1));
        assert_eq!(
            report.totals,
            Aggregate {
                orders: 15,
                units: 23,
                revenue: dec!(1500)
            }
        );
        assert_eq!(report.aov, dec!(100));
        assert_eq!(report.channels.len(), 2);
        assert_eq!(report.channels[0].channel, Channel::from("shopify"));
        // Nothing before the first day, so every delta is zero.
        assert_eq!(report.prior_totals, Aggregate::zero());
        assert_eq!(report.delta, Delta::zero());
    }

    #[test]
    fn week_over_week_comparison() {
        let rows = two_weeks();
        let selection = Selection::new(vec![Channel::from("shopify")], RangeSelector::Last7Days);
        let report = DashboardEngine::new().calculate(&rows, &selection, &FixedClock(day(2024, 1, 14)));

        assert_eq!(report.range.start(), day(2024, 1, 8));
        assert_eq!(report.prior_range.start(), day(2024, 1, 1));
        assert_eq!(report.prior_range.end(), day(2024, 1, 7));
        assert_eq!(report.totals.orders, 84);
        assert_eq!(report.prior_totals.orders, 70);
        assert_eq!(report.delta.orders_pct, dec!(20));
        assert_eq!(report.delta.revenue_pct, dec!(20));
        assert_eq!(report.delta.aov_pct, Decimal::ZERO);
    }

    #[test]
    fn clamped_month_compares_against_nothing() {
        let rows = two_weeks();
        let selection = Selection::all(&all_channels());
        let report = DashboardEngine::new().calculate(&rows, &selection, &FixedClock(day(2024, 1, 14)));

        assert_eq!(report.range.start(), day(2024, 1, 1));
        assert_eq!(report.range.days(), 14);
        assert_eq!(report.prior_range.days(), 14);
        assert_eq!(report.daily.len(), 14);
        assert_eq!(report.sparklines.orders.len(), 14);
        assert_eq!(report.delta, Delta::zero());
    }

    #[test]
    fn stacked_and_share_views_follow_the_selection() {
        let rows = two_weeks();
        let selection = Selection::new(
            vec![Channel::from("myntra"), Channel::from("nykaa"), Channel::from("shopify")],
            RangeSelector::Last7Days,
        );
        let report = DashboardEngine::new().calculate(&rows, &selection, &FixedClock(day(2024, 1, 14)));

        assert_eq!(report.stacked.len(), 7);
        let first = &report.stacked[0];
        assert_eq!(first.parts.len(), 3);
        assert_eq!(first.parts[0].revenue, dec!(400));
        assert_eq!(first.parts[1].revenue, Decimal::ZERO);
        assert_eq!(first.parts[2].revenue, dec!(1200));

        // Share has no entry for nykaa: it had no rows.
        assert_eq!(report.share.len(), 2);
        assert_eq!(report.revenue_series[0].label, "01-08");
        assert_eq!(report.revenue_series[0].value, dec!(1600));
    }

    #[test]
    fn channel_cards_cover_every_configured_channel() {
        let rows = two_weeks();
        let selection = Selection::new(vec![Channel::from("shopify")], RangeSelector::Last7Days);
        let report = DashboardEngine::new().calculate(&rows, &selection, &FixedClock(day(2024, 1, 14)));
        let cards = report.channel_cards(&all_channels());

        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].display_name, "Shopify");
        assert!(cards[0].active);
        assert_eq!(cards[0].orders, 84);
        assert!(!cards[1].active);
        assert_eq!(cards[1].revenue, Decimal::ZERO);
        assert_eq!(cards[3].palette, "#FF8A00");
    }

    #[test]
    fn empty_source_produces_a_zeroed_report() {
        let selection = Selection::all(&all_channels());
        let report = DashboardEngine::new().calculate(&[], &selection, &FixedClock(day(2024, 1, 14)));
        assert_eq!(report.totals, Aggregate::zero());
        assert_eq!(report.aov, Decimal::ZERO);
        assert!(report.daily.is_empty());
        assert!(report.stacked.is_empty());
        assert_eq!(report.range.days(), 30);
    }

    #[test]
    fn recomputation_is_deterministic() {
        let rows = two_weeks();
        let selection = Selection::all(&all_channels()).with_range(RangeSelector::Last7Days);
        let clock = FixedClock(day(2024, 1, 14));
        let engine = DashboardEngine::new();
        assert_eq!(
            engine.calculate(&rows, &selection, &clock),
            engine.calculate(&rows, &selection, &clock)
        );
    }

    #[test]
    fn tiny_prior_revenue_does_not_abort_the_report() {
        let rows = vec![
            row(day(2024, 1, 1), "shopify", 1, 1, dec!(0.0000000000000000000001)),
            row(day(2024, 1, 2), "shopify", 1, 1, dec!(100000000000)),
        ];
        let selection = Selection::new(vec![Channel::from("shopify")], RangeSelector::Today);
        let report = DashboardEngine::new().calculate(&rows, &selection, &FixedClock(day(2024, 1, 2)));
        assert_eq!(report.delta.revenue_pct, Decimal::MAX);
        assert_eq!(report.delta.orders_pct, Decimal::ZERO);
    }

    #[test]
    fn zero_length_sparklines_are_rejected() {
        assert!(DashboardEngine::with_sparkline_len(0).is_err());
        let engine = DashboardEngine::with_sparkline_len(3).unwrap();
        let selection = Selection::all(&all_channels());
        let report = engine.calculate(&two_weeks(), &selection, &FixedClock(day(2024, 1, 14)));
        assert_eq!(report.sparklines.revenue.len(), 3);
    }
}
