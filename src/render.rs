use analytics::{ChannelCard, DashboardReport, delta_label, format_currency, format_indian_number};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, Table};
use core_types::Metric;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

const SPARK_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

#[derive(Serialize)]
struct JsonOutput<'a> {
    report: &'a DashboardReport,
    cards: &'a [ChannelCard],
}

pub fn render_json(report: &DashboardReport, cards: &[ChannelCard]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonOutput { report, cards })
}

/// Renders the KPI, channel and daily tables for a terminal.
pub fn render_tables(report: &DashboardReport, cards: &[ChannelCard], symbol: &str) -> String {
    let money = |amount: Decimal| format_currency(amount, symbol);

    let mut out = format!(
        "Range {} ({} days), compared with {}\n",
        report.range,
        report.range.days(),
        report.prior_range
    );

    // --- KPIs ---
    let mut kpis = Table::new();
    kpis.load_preset(UTF8_FULL)
        .set_header(vec!["Metric", "Value", "vs prior", "Last days"]);
    let delta = &report.delta;
    for (metric, value, pct) in [
        (Metric::Revenue, money(report.totals.revenue), delta.revenue_pct),
        (Metric::Orders, format_indian_number(report.totals.orders), delta.orders_pct),
        (Metric::Units, format_indian_number(report.totals.units), delta.units_pct),
        (Metric::Aov, money(report.aov), delta.aov_pct),
    ] {
        kpis.add_row(vec![
            metric.label().to_string(),
            value,
            delta_label(pct),
            spark_glyphs(report.sparklines.get(metric)),
        ]);
    }
    out.push_str(&kpis.to_string());
    out.push('\n');

    // --- Channels ---
    let mut channels = Table::new();
    channels
        .load_preset(UTF8_FULL)
        .set_header(vec!["Channel", "Active", "Orders", "Units", "Revenue", "Share"]);
    for card in cards {
        channels.add_row(vec![
            card.display_name.clone(),
            if card.active { "yes" } else { "no" }.to_string(),
            format_indian_number(card.orders),
            format_indian_number(card.units),
            money(card.revenue),
            share_pct(card.revenue, report.totals.revenue),
        ]);
    }
    align_numeric_columns(&mut channels, 2..6);
    out.push_str(&channels.to_string());
    out.push('\n');

    // --- Daily ---
    let mut daily = Table::new();
    daily
        .load_preset(UTF8_FULL)
        .set_header(vec!["Date", "Orders", "Units", "Revenue", "AOV"]);
    for bucket in &report.daily {
        daily.add_row(vec![
            bucket.date.to_string(),
            format_indian_number(bucket.orders),
            format_indian_number(bucket.units),
            money(bucket.revenue),
            money(bucket.aov()),
        ]);
    }
    align_numeric_columns(&mut daily, 1..5);
    out.push_str(&daily.to_string());

    out
}

/// Scales a series against its maximum (at least 1) onto eight block glyphs.
fn spark_glyphs(values: &[Decimal]) -> String {
    let max = values.iter().copied().fold(Decimal::ONE, Decimal::max);
    values
        .iter()
        .map(|v| {
            let ratio = (*v / max).to_f64().unwrap_or(0.0).clamp(0.0, 1.0);
            SPARK_GLYPHS[(ratio * 7.0).round() as usize]
        })
        .collect()
}

fn share_pct(part: Decimal, total: Decimal) -> String {
    if total.is_zero() {
        return "-".to_string();
    }
    part.checked_div(total)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map_or_else(|| "-".to_string(), |pct| format!("{:.1}%", pct.round_dp(1)))
}

fn align_numeric_columns(table: &mut Table, columns: std::ops::Range<usize>) {
    for index in columns {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}
