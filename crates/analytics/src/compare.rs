use core_types::{Aggregate, Delta};
use rust_decimal::Decimal;

/// Percentage change from `prev` to `curr`.
///
/// Returns zero when `prev` is zero, so "no prior data" reads as "no change".
/// A change too large for `Decimal` saturates at `Decimal::MAX` or `Decimal::MIN`
/// in the direction of the change.
pub fn pct(curr: Decimal, prev: Decimal) -> Decimal {
    if prev.is_zero() {
        return Decimal::ZERO;
    }
    curr.checked_sub(prev)
        .and_then(|diff| diff.checked_div(prev))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or_else(|| {
            tracing::warn!(%curr, %prev, "Percentage change overflowed; saturating.");
            if (curr > prev) == prev.is_sign_positive() {
                Decimal::MAX
            } else {
                Decimal::MIN
            }
        })
}

/// Period-over-period deltas for every KPI, AOV included.
pub fn delta(current: &Aggregate, prior: &Aggregate) -> Delta {
    let delta = Delta {
        orders_pct: pct(Decimal::from(current.orders), Decimal::from(prior.orders)),
        units_pct: pct(Decimal::from(current.units), Decimal::from(prior.units)),
        revenue_pct: pct(current.revenue, prior.revenue),
        aov_pct: pct(current.aov(), prior.aov()),
    };
    tracing::debug!(?delta, "Computed period-over-period delta.");
    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn agg(orders: u64, units: u64, revenue: Decimal) -> Aggregate {
        Aggregate {
            orders,
            units,
            revenue,
        }
    }

    #[test]
    fn growth_is_reported_in_percent() {
        let d = delta(&agg(120, 300, dec!(12000)), &agg(100, 200, dec!(10000)));
        assert_eq!(d.orders_pct, dec!(20));
        assert_eq!(d.units_pct, dec!(50));
        assert_eq!(d.revenue_pct, dec!(20));
        // AOV is 100 on both sides.
        assert_eq!(d.aov_pct, Decimal::ZERO);
    }

    #[test]
    fn decline_is_negative() {
        assert_eq!(pct(dec!(75), dec!(100)), dec!(-25));
    }

    #[test]
    fn comparing_an_aggregate_with_itself_is_flat() {
        let a = agg(37, 51, dec!(48213.77));
        assert_eq!(delta(&a, &a), Delta::zero());
    }

    #[test]
    fn zero_prior_yields_zero_delta() {
        let a = agg(37, 51, dec!(48213.77));
        assert_eq!(delta(&a, &Aggregate::zero()), Delta::zero());
    }

    #[test]
    fn tiny_prior_saturates_instead_of_panicking() {
        let tiny = dec!(0.0000000000000000000001);
        let d = delta(&agg(1, 1, dec!(100000000000)), &agg(1, 1, tiny));
        assert_eq!(d.revenue_pct, Decimal::MAX);
        assert_eq!(d.aov_pct, Decimal::MAX);
        assert_eq!(d.orders_pct, Decimal::ZERO);

        assert_eq!(pct(dec!(-100000000000), tiny), Decimal::MIN);
        assert_eq!(pct(Decimal::MAX, dec!(-1)), Decimal::MIN);
    }

    #[test]
    fn aov_delta_uses_derived_order_values() {
        // AOV 200 now versus 160 before.
        let d = delta(&agg(10, 10, dec!(2000)), &agg(10, 10, dec!(1600)));
        assert_eq!(d.aov_pct, dec!(25));

        // Prior side has revenue but no orders, so its AOV is zero.
        let d = delta(&agg(10, 10, dec!(2000)), &agg(0, 0, dec!(1600)));
        assert_eq!(d.aov_pct, Decimal::ZERO);
        assert_eq!(d.revenue_pct, dec!(25));
    }
}
