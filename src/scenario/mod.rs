//! Scenario documents: everything needed to run one forecast, stored as JSON.

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{CashflowError, Result},
    forecast::horizon,
    model::{BusinessProfile, CashEvent, LineItem},
    utils::write_atomic,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub profile: BusinessProfile,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub events: Vec<CashEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_balance: Option<f64>,
}

/// Problems that do not stop a forecast but usually point at bad data.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioWarning {
    /// The item's length differs from the forecast horizon.
    LengthMismatch {
        label: String,
        len: usize,
        horizon: usize,
    },
    /// The event never lands inside the forecast.
    EventOutsideHorizon { label: String },
}

impl Scenario {
    pub fn new(name: impl Into<String>, profile: BusinessProfile) -> Self {
        Self {
            name: name.into(),
            profile,
            ..Self::default()
        }
    }

    pub fn horizon(&self) -> usize {
        horizon(&self.line_items)
    }

    /// Events the forecast drops because they never resolve into the horizon.
    pub fn events_outside_horizon(&self) -> impl Iterator<Item = &CashEvent> + '_ {
        let horizon = self.horizon();
        let start = self.profile.forecast_start;
        self.events.iter().filter(move |event| {
            event
                .month_index(start)
                .map_or(true, |index| index >= horizon)
        })
    }

    /// Strict checks for callers that want them before forecasting.
    ///
    /// Hard errors (duplicate ids, non-finite numbers) are returned as `Err`;
    /// recoverable oddities come back as warnings.
    pub fn validate(&self) -> Result<Vec<ScenarioWarning>> {
        let mut seen = HashSet::new();
        for item in &self.line_items {
            if !seen.insert(item.id) {
                return Err(CashflowError::InvalidScenario(format!(
                    "duplicate line item id {}",
                    item.id
                )));
            }
            if let Some(month) = item.monthly_values.iter().position(|v| !v.is_finite()) {
                return Err(CashflowError::InvalidScenario(format!(
                    "line item `{}` has a non-finite value in month {}",
                    item.label, month
                )));
            }
        }
        for event in &self.events {
            if !event.amount.is_finite() {
                return Err(CashflowError::InvalidScenario(format!(
                    "event `{}` has a non-finite amount",
                    event.label
                )));
            }
        }
        if let Some(balance) = self.opening_balance {
            if !balance.is_finite() {
                return Err(CashflowError::InvalidScenario(
                    "opening balance must be finite".into(),
                ));
            }
        }

        let horizon = self.horizon();
        let mut warnings: Vec<ScenarioWarning> = self
            .line_items
            .iter()
            .filter(|item| item.len() != horizon)
            .map(|item| ScenarioWarning::LengthMismatch {
                label: item.label.clone(),
                len: item.len(),
                horizon,
            })
            .collect();
        warnings.extend(self.events_outside_horizon().map(|event| {
            ScenarioWarning::EventOutsideHorizon {
                label: event.label.clone(),
            }
        }));
        Ok(warnings)
    }
}

/// Writes the scenario to disk atomically by staging to a temporary file.
pub fn save_scenario_to_file(scenario: &Scenario, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(scenario)?;
    write_atomic(path, &json)?;
    tracing::debug!(path = %path.display(), scenario = %scenario.name, "saved scenario");
    Ok(())
}

/// Loads a scenario from disk, returning structured errors on failure.
pub fn load_scenario_from_file(path: &Path) -> Result<Scenario> {
    let data = fs::read_to_string(path)?;
    let scenario: Scenario = serde_json::from_str(&data)?;
    tracing::debug!(
        path = %path.display(),
        scenario = %scenario.name,
        line_items = scenario.line_items.len(),
        events = scenario.events.len(),
        "loaded scenario"
    );
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineItemKind;

    fn scenario() -> Scenario {
        let mut scenario = Scenario::new("Base case", BusinessProfile::new("Acme"));
        scenario.line_items = vec![
            LineItem::new(LineItemKind::Revenue, "Subscriptions", vec![100.0; 12]),
            LineItem::new(LineItemKind::Opex, "Rent", vec![40.0; 12]),
        ];
        scenario.events = vec![CashEvent::at_month("Seed", 0, 10_000.0)];
        scenario.opening_balance = Some(500.0);
        scenario
    }

    #[test]
    fn clean_scenario_has_no_warnings() {
        assert!(scenario().validate().expect("valid").is_empty());
    }

    #[test]
    fn mismatched_lengths_and_late_events_are_warnings() {
        let mut scenario = scenario();
        scenario.line_items[1].monthly_values.truncate(6);
        scenario.events.push(CashEvent::at_month("Too late", 12, 1.0));
        let warnings = scenario.validate().expect("still valid");
        assert_eq!(
            warnings,
            vec![
                ScenarioWarning::LengthMismatch {
                    label: "Rent".into(),
                    len: 6,
                    horizon: 12,
                },
                ScenarioWarning::EventOutsideHorizon {
                    label: "Too late".into(),
                },
            ]
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut scenario = scenario();
        let copy = scenario.line_items[0].clone();
        scenario.line_items.push(copy);
        let err = scenario.validate().expect_err("duplicate id");
        assert!(err.to_string().contains("duplicate line item id"));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let mut scenario = scenario();
        scenario.line_items[0].monthly_values[3] = f64::NAN;
        let err = scenario.validate().expect_err("nan value");
        assert!(err.to_string().contains("month 3"), "unexpected error: {err}");
    }

    #[test]
    fn scenario_file_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("base.json");
        let original = scenario();
        save_scenario_to_file(&original, &path).expect("save");
        let loaded = load_scenario_from_file(&path).expect("load");
        assert_eq!(loaded, original);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_scenario_from_file(&dir.path().join("absent.json")).expect_err("missing");
        assert!(matches!(err, CashflowError::Io(_)));
    }
}
