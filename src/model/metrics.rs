use serde::{Deserialize, Serialize};

/// KPIs derived from a computed series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ForecastMetrics {
    /// Cash balance at the final forecast month.
    pub net_cash_position: f64,
    /// Months until cash runs out; `None` when cash is not being depleted.
    pub cash_runway: Option<f64>,
    pub arr: f64,
    /// Percentage, `0.0` when there is no revenue.
    pub gross_margin: f64,
    pub burn: f64,
}

/// KPIs derived straight from line items, without building a series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub arr: f64,
    pub gross_margin: f64,
    pub burn: f64,
    pub runway_months: i64,
}
