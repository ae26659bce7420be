use chrono::NaiveDate;

use crate::model::{month_label, BusinessProfile, CashEvent, LineItem, SeriesPoint};

use super::totals::KindTotals;

/// Number of months to forecast: the length of the first line item.
///
/// Later items are not consulted, so a longer item is cut off and a shorter
/// one reads as zero past its end.
pub fn horizon(line_items: &[LineItem]) -> usize {
    line_items.first().map(LineItem::len).unwrap_or(0)
}

/// Builds the revenue/expense/net series without cash tracking.
pub fn build_series(line_items: &[LineItem]) -> Vec<SeriesPoint> {
    (0..horizon(line_items))
        .map(|month| point_for_month(line_items, month))
        .collect()
}

/// Builds the series and a running cash balance that starts from
/// `opening_balance` (zero when absent) and absorbs event amounts in the
/// month each event lands in.
pub fn build_enhanced_forecast(
    profile: &BusinessProfile,
    line_items: &[LineItem],
    events: &[CashEvent],
    opening_balance: Option<f64>,
) -> Vec<SeriesPoint> {
    let months = horizon(line_items);
    let impacts = event_amounts(events, profile.forecast_start, months);
    let mut balance = opening_balance.unwrap_or(0.0);

    (0..months)
        .map(|month| {
            let mut point = point_for_month(line_items, month);
            balance = balance + point.net + impacts[month];
            point.cash_balance = Some(balance);
            point
        })
        .collect()
}

/// Per-month sum of event amounts over `months` months. Events that do not
/// resolve into the horizon are dropped.
pub fn event_amounts(
    events: &[CashEvent],
    forecast_start: Option<NaiveDate>,
    months: usize,
) -> Vec<f64> {
    let mut amounts = vec![0.0; months];
    for event in events {
        if let Some(slot) = event
            .month_index(forecast_start)
            .and_then(|index| amounts.get_mut(index))
        {
            *slot += event.amount;
        }
    }
    amounts
}

fn point_for_month(line_items: &[LineItem], month: usize) -> SeriesPoint {
    let totals = KindTotals::for_month(line_items, month);
    let expenses = totals.expenses();
    SeriesPoint {
        month: month_label(month).to_string(),
        revenue: totals.revenue,
        cogs: totals.cogs,
        expenses,
        net: totals.net(),
        cash_balance: None,
    }
}
