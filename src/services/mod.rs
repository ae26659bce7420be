//! Orchestration around the pure engine: the flows the chart and metrics
//! collaborators run against a scenario.

pub mod forecast_service;

pub use forecast_service::{ForecastReport, ForecastService};
