#![allow(dead_code)]

use std::path::PathBuf;

use cashflow_core::{
    model::{BusinessProfile, CashEvent, LineItem, LineItemKind},
    scenario::{save_scenario_to_file, Scenario},
};
use tempfile::TempDir;

pub fn flat(kind: LineItemKind, value: f64, months: usize) -> LineItem {
    LineItem::new(kind, kind.label(), vec![value; months])
}

/// Revenue 100, cogs 60 and opex 60 every month for a year.
pub fn baseline_items() -> Vec<LineItem> {
    vec![
        flat(LineItemKind::Revenue, 100.0, 12),
        flat(LineItemKind::Cogs, 60.0, 12),
        flat(LineItemKind::Opex, 60.0, 12),
    ]
}

pub fn baseline_scenario() -> Scenario {
    let mut scenario = Scenario::new("Baseline", BusinessProfile::new("Acme Analytics"));
    scenario.line_items = baseline_items();
    scenario.events = vec![CashEvent::at_month("Seed round", 0, 1_000.0)];
    scenario.opening_balance = Some(0.0);
    scenario
}

/// Writes `scenario` into a fresh temp dir; keep the guard alive while the file is used.
pub fn write_scenario(scenario: &Scenario) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("scenario.json");
    save_scenario_to_file(scenario, &path).expect("write scenario");
    (dir, path)
}
