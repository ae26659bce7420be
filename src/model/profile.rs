use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Context about the business a scenario belongs to.
///
/// Forecasting only looks at `forecast_start`, to place date-anchored events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Reporting currency; settings supply one when the profile does not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast_start: Option<NaiveDate>,
}

impl BusinessProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            industry: None,
            currency: None,
            forecast_start: None,
        }
    }
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self::new("Untitled business")
    }
}
