use serde::{Deserialize, Serialize};

/// Display labels for forecast months. Month `i` is labelled
/// `MONTH_LABELS[i % 12]` regardless of the real start date.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn month_label(index: usize) -> &'static str {
    MONTH_LABELS[index % MONTH_LABELS.len()]
}

/// One computed month of a forecast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    pub month: String,
    pub revenue: f64,
    /// Cost-of-goods portion of `expenses`.
    pub cogs: f64,
    pub expenses: f64,
    pub net: f64,
    /// Running balance; only the enhanced builder fills it in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_balance: Option<f64>,
}
