//! Forecast input records and the shapes the engine produces from them.

pub mod event;
pub mod line_item;
pub mod metrics;
pub mod profile;
pub mod series;

pub use event::{CashEvent, EventAnchor};
pub use line_item::{LineItem, LineItemKind};
pub use metrics::{ForecastMetrics, MetricsSummary};
pub use profile::BusinessProfile;
pub use series::{month_label, SeriesPoint, MONTH_LABELS};
