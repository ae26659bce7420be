//! The forecasting engine: pure functions from line items and events to a
//! monthly series and the KPIs derived from it.
//!
//! Nothing here performs I/O, logs, or keeps state between calls, so every
//! function is safe to call from any thread or async task.

pub mod builder;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod metrics;
pub mod totals;

pub use builder::{build_enhanced_forecast, build_series, event_amounts, horizon};
pub use metrics::{
    calculate_forecast_metrics, gross_margin, monthly_burn, summarize_metrics,
    summarize_metrics_with, MetricsConfig, DEFAULT_FALLBACK_RUNWAY_MONTHS,
    DEFAULT_RUNWAY_REVENUE_MULTIPLIER,
};
pub use totals::KindTotals;
