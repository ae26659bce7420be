mod common;

use cashflow_core::{
    forecast::{
        build_enhanced_forecast, build_series, calculate_forecast_metrics, event_amounts,
        summarize_metrics, DEFAULT_FALLBACK_RUNWAY_MONTHS,
    },
    model::{BusinessProfile, CashEvent, LineItem, LineItemKind},
};
use chrono::NaiveDate;
use common::{baseline_items, flat};

fn varied_items() -> Vec<LineItem> {
    vec![
        LineItem::new(
            LineItemKind::Revenue,
            "Subscriptions",
            (0..24).map(|m| 1_000.0 + 37.5 * m as f64).collect(),
        ),
        LineItem::new(
            LineItemKind::Revenue,
            "Refunds",
            (0..24).map(|m| if m % 5 == 0 { -80.0 } else { 0.0 }).collect(),
        ),
        LineItem::new(LineItemKind::Cogs, "Hosting", vec![210.25; 24]),
        LineItem::new(LineItemKind::Opex, "Payroll", vec![1_450.0; 18]),
        LineItem::new(LineItemKind::Other, "Depreciation", vec![75.0; 24]),
    ]
}

fn varied_events() -> Vec<CashEvent> {
    vec![
        CashEvent::at_month("Seed", 0, 20_000.0),
        CashEvent::at_month("Laptops", 3, -4_200.0),
        CashEvent::at_month("Bridge loan", 13, 7_500.0),
        CashEvent::at_month("After the horizon", 24, 1_000_000.0),
    ]
}

#[test]
fn series_length_matches_shared_horizon() {
    for months in [1usize, 6, 12, 36, 120] {
        let items = vec![
            flat(LineItemKind::Revenue, 10.0, months),
            flat(LineItemKind::Opex, 4.0, months),
        ];
        assert_eq!(build_series(&items).len(), months);
    }
}

#[test]
fn net_is_revenue_minus_expenses_everywhere() {
    let series = build_enhanced_forecast(
        &BusinessProfile::default(),
        &varied_items(),
        &varied_events(),
        Some(1_234.5),
    );
    assert_eq!(series.len(), 24);
    for point in &series {
        assert_eq!(point.net, point.revenue - point.expenses);
    }
}

#[test]
fn first_month_of_baseline_regression() {
    let first = build_series(&baseline_items()).remove(0);
    assert_eq!(first.month, "Jan");
    assert_eq!(first.revenue, 100.0);
    assert_eq!(first.expenses, 120.0);
    assert_eq!(first.net, -20.0);
}

#[test]
fn baseline_summary_metrics() {
    let summary = summarize_metrics(&baseline_items());
    assert_eq!(summary.arr, 1200.0);
    assert!((summary.gross_margin - 40.0).abs() < 1e-9);
    assert!((summary.burn - 20.0).abs() < 1e-9);
    assert!(summary.runway_months > 0);
}

#[test]
fn zero_revenue_margin_is_zero_not_nan() {
    let items = vec![
        flat(LineItemKind::Revenue, 0.0, 12),
        flat(LineItemKind::Cogs, 40.0, 12),
    ];
    let summary = summarize_metrics(&items);
    assert_eq!(summary.gross_margin, 0.0);
    let metrics = calculate_forecast_metrics(&build_series(&items));
    assert_eq!(metrics.gross_margin, 0.0);
    assert!(metrics.gross_margin.is_finite());
}

#[test]
fn non_burning_plans_use_fallback_runway() {
    let plans = vec![
        vec![flat(LineItemKind::Revenue, 50.0, 12)],
        vec![
            flat(LineItemKind::Revenue, 50.0, 12),
            flat(LineItemKind::Opex, 50.0, 12),
        ],
        Vec::new(),
    ];
    for items in plans {
        let summary = summarize_metrics(&items);
        assert!(summary.burn <= 0.0);
        assert_eq!(summary.runway_months, DEFAULT_FALLBACK_RUNWAY_MONTHS);
    }
}

#[test]
fn cash_balance_follows_recurrence() {
    let items = varied_items();
    let events = varied_events();
    let opening = 1_234.5;
    let series =
        build_enhanced_forecast(&BusinessProfile::default(), &items, &events, Some(opening));
    let impacts = event_amounts(&events, None, series.len());

    let mut previous = opening;
    for (idx, point) in series.iter().enumerate() {
        let expected = previous + point.net + impacts[idx];
        assert_eq!(point.cash_balance, Some(expected), "month {idx}");
        previous = expected;
    }
}

#[test]
fn builders_are_idempotent() {
    let items = varied_items();
    let events = varied_events();
    let profile = BusinessProfile::default();

    let basic = build_series(&items);
    assert_eq!(basic, build_series(&items));

    let first = build_enhanced_forecast(&profile, &items, &events, Some(10.0));
    let second = build_enhanced_forecast(&profile, &items, &events, Some(10.0));
    let bits = |series: &[cashflow_core::model::SeriesPoint]| -> Vec<u64> {
        series
            .iter()
            .filter_map(|p| p.cash_balance)
            .map(f64::to_bits)
            .collect()
    };
    assert_eq!(bits(first.as_slice()), bits(second.as_slice()));
    assert_eq!(
        calculate_forecast_metrics(&first),
        calculate_forecast_metrics(&second)
    );
}

#[test]
fn event_beyond_horizon_changes_nothing() {
    let items = baseline_items();
    let profile = BusinessProfile::default();
    let without = build_enhanced_forecast(&profile, &items, &[], Some(0.0));
    let with_late = build_enhanced_forecast(
        &profile,
        &items,
        &[CashEvent::at_month("Too late", 12, 50_000.0)],
        Some(0.0),
    );
    assert_eq!(without, with_late);
}

#[test]
fn date_event_before_start_or_after_horizon_is_ignored() {
    let mut profile = BusinessProfile::default();
    profile.forecast_start = NaiveDate::from_ymd_opt(2025, 1, 1);
    let items = baseline_items();
    let events = vec![
        CashEvent::on_date("Old grant", NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(), 9.0),
        CashEvent::on_date("Next year", NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), 9.0),
    ];
    let series = build_enhanced_forecast(&profile, &items, &events, None);
    assert_eq!(series[11].cash_balance, Some(-240.0));
}

#[test]
fn short_item_contributes_zero_without_panicking() {
    let items = vec![
        flat(LineItemKind::Revenue, 100.0, 12),
        flat(LineItemKind::Opex, 30.0, 5),
    ];
    let series = build_series(&items);
    assert_eq!(series.len(), 12);
    assert!(series[..5].iter().all(|p| p.expenses == 30.0));
    assert!(series[5..].iter().all(|p| p.expenses == 0.0 && p.net == 100.0));
}

#[test]
fn labels_cycle_past_a_year() {
    let series = build_series(&[flat(LineItemKind::Revenue, 1.0, 25)]);
    assert_eq!(series[12].month, "Jan");
    assert_eq!(series[23].month, "Dec");
    assert_eq!(series[24].month, "Jan");
}

#[test]
fn arr_sums_whole_horizon_rather_than_annualizing() {
    let summary = summarize_metrics(&[flat(LineItemKind::Revenue, 100.0, 36)]);
    assert_eq!(summary.arr, 3_600.0);
}
