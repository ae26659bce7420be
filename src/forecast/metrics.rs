use serde::{Deserialize, Serialize};

use crate::model::{ForecastMetrics, LineItem, MetricsSummary, SeriesPoint};

use super::{builder::horizon, totals::KindTotals};

/// Share of total revenue assumed to be available to cover burn when
/// estimating runway from line items.
pub const DEFAULT_RUNWAY_REVENUE_MULTIPLIER: f64 = 0.6;

/// Runway reported when a plan shows no burn.
pub const DEFAULT_FALLBACK_RUNWAY_MONTHS: i64 = 36;

/// Tunable heuristics for the line-item runway estimate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MetricsConfig {
    #[serde(default = "MetricsConfig::default_multiplier")]
    pub runway_revenue_multiplier: f64,
    #[serde(default = "MetricsConfig::default_fallback")]
    pub fallback_runway_months: i64,
}

impl MetricsConfig {
    fn default_multiplier() -> f64 {
        DEFAULT_RUNWAY_REVENUE_MULTIPLIER
    }

    fn default_fallback() -> i64 {
        DEFAULT_FALLBACK_RUNWAY_MONTHS
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            runway_revenue_multiplier: DEFAULT_RUNWAY_REVENUE_MULTIPLIER,
            fallback_runway_months: DEFAULT_FALLBACK_RUNWAY_MONTHS,
        }
    }
}

/// Gross margin as a percentage; `0.0` when there is no revenue.
pub fn gross_margin(revenue: f64, cogs: f64) -> f64 {
    if revenue == 0.0 {
        return 0.0;
    }
    (revenue - cogs) / revenue * 100.0
}

/// Average monthly excess of expenses over revenue, floored at zero.
pub fn monthly_burn(revenue: f64, expenses: f64, months: usize) -> f64 {
    if months == 0 {
        return 0.0;
    }
    let months = months as f64;
    (expenses / months - revenue / months).max(0.0)
}

/// Derives KPIs from a series, typically one from `build_enhanced_forecast`.
///
/// A series without cash balances reports a zero cash position. Runway is
/// negative once cash is already below zero.
pub fn calculate_forecast_metrics(series: &[SeriesPoint]) -> ForecastMetrics {
    let Some(last) = series.last() else {
        return ForecastMetrics::default();
    };

    let mut revenue = 0.0;
    let mut cogs = 0.0;
    let mut expenses = 0.0;
    let mut net = 0.0;
    for point in series {
        revenue += point.revenue;
        cogs += point.cogs;
        expenses += point.expenses;
        net += point.net;
    }

    let net_cash_position = last.cash_balance.unwrap_or(0.0);
    let average_net = net / series.len() as f64;
    let cash_runway = if average_net < 0.0 {
        average_burn(series).map(|burn| net_cash_position / burn)
    } else {
        None
    };

    ForecastMetrics {
        net_cash_position,
        cash_runway,
        arr: revenue,
        gross_margin: gross_margin(revenue, cogs),
        burn: monthly_burn(revenue, expenses, series.len()),
    }
}

/// Mean outflow across the months that lost money.
fn average_burn(series: &[SeriesPoint]) -> Option<f64> {
    let mut total = 0.0;
    let mut months = 0usize;
    for point in series.iter().filter(|point| point.net < 0.0) {
        total += -point.net;
        months += 1;
    }
    (months > 0).then(|| total / months as f64)
}

/// Line-item KPIs with the default heuristics.
pub fn summarize_metrics(line_items: &[LineItem]) -> MetricsSummary {
    summarize_metrics_with(line_items, &MetricsConfig::default())
}

/// Line-item KPIs. `arr` is every revenue value summed, whatever the horizon.
pub fn summarize_metrics_with(line_items: &[LineItem], config: &MetricsConfig) -> MetricsSummary {
    let totals = KindTotals::over_items(line_items);
    let arr = totals.revenue;
    let burn = monthly_burn(totals.revenue, totals.expenses(), horizon(line_items));
    let runway_months = if burn > 0.0 {
        (arr * config.runway_revenue_multiplier / burn).round() as i64
    } else {
        config.fallback_runway_months
    };

    MetricsSummary {
        arr,
        gross_margin: gross_margin(totals.revenue, totals.cogs),
        burn,
        runway_months,
    }
}
