use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A one-off cash impact such as a funding round or a large purchase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashEvent {
    pub id: Uuid,
    #[serde(default)]
    pub label: String,
    /// Signed amount: positive for inflows, negative for outflows.
    pub amount: f64,
    pub anchor: EventAnchor,
}

/// Where in the forecast an event lands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EventAnchor {
    MonthIndex(usize),
    Date(NaiveDate),
}

impl CashEvent {
    pub fn at_month(label: impl Into<String>, month: usize, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            amount,
            anchor: EventAnchor::MonthIndex(month),
        }
    }

    pub fn on_date(label: impl Into<String>, date: NaiveDate, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            amount,
            anchor: EventAnchor::Date(date),
        }
    }

    /// Resolves the anchor to a month offset from `forecast_start`.
    ///
    /// Date anchors need a start month; dates before it resolve to `None`.
    /// The result is not checked against any horizon.
    pub fn month_index(&self, forecast_start: Option<NaiveDate>) -> Option<usize> {
        match self.anchor {
            EventAnchor::MonthIndex(index) => Some(index),
            EventAnchor::Date(date) => {
                let start = forecast_start?;
                let offset = month_ordinal(date) - month_ordinal(start);
                usize::try_from(offset).ok()
            }
        }
    }
}

fn month_ordinal(date: NaiveDate) -> i64 {
    date.year() as i64 * 12 + date.month0() as i64
}
