use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    forecast::{build_enhanced_forecast, calculate_forecast_metrics, summarize_metrics_with},
    model::{ForecastMetrics, MetricsSummary, SeriesPoint},
    scenario::Scenario,
};

/// Series plus both flavours of KPIs for one scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReport {
    pub scenario: String,
    pub currency: String,
    pub series: Vec<SeriesPoint>,
    pub metrics: ForecastMetrics,
    pub summary: MetricsSummary,
}

pub struct ForecastService;

impl ForecastService {
    /// Builds the chart series for a scenario.
    pub fn series(scenario: &Scenario) -> Vec<SeriesPoint> {
        build_enhanced_forecast(
            &scenario.profile,
            &scenario.line_items,
            &scenario.events,
            scenario.opening_balance,
        )
    }

    /// Runs the full metrics-display flow: enhanced series, series metrics,
    /// and line-item metrics. The profile's currency wins over the configured one.
    pub fn report(scenario: &Scenario, config: &Config) -> ForecastReport {
        let series = Self::series(scenario);
        let metrics = calculate_forecast_metrics(&series);
        let summary = summarize_metrics_with(&scenario.line_items, &config.metrics);

        let horizon = scenario.horizon();
        let ignored_events = scenario.events_outside_horizon().count();
        if ignored_events > 0 {
            tracing::warn!(
                scenario = %scenario.name,
                ignored_events,
                horizon,
                "events outside the forecast horizon were ignored"
            );
        }
        tracing::info!(
            scenario = %scenario.name,
            horizon,
            line_items = scenario.line_items.len(),
            events = scenario.events.len(),
            net_cash_position = metrics.net_cash_position,
            "built forecast report"
        );

        ForecastReport {
            scenario: scenario.name.clone(),
            currency: scenario
                .profile
                .currency
                .clone()
                .unwrap_or_else(|| config.currency.clone()),
            series,
            metrics,
            summary,
        }
    }
}
