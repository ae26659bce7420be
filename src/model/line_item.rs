use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of a financial plan: a category plus a value per forecast month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: LineItemKind,
    pub label: String,
    #[serde(default)]
    pub monthly_values: Vec<f64>,
}

impl LineItem {
    pub fn new(kind: LineItemKind, label: impl Into<String>, monthly_values: Vec<f64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            label: label.into(),
            monthly_values,
        }
    }

    /// Value for `month`, or `0.0` when the item does not reach that far.
    pub fn value_at(&self, month: usize) -> f64 {
        self.monthly_values.get(month).copied().unwrap_or(0.0)
    }

    /// Number of months this item carries values for.
    pub fn len(&self) -> usize {
        self.monthly_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_values.is_empty()
    }
}

/// Line item categories. Only revenue, cogs and opex feed the forecast;
/// anything else deserializes to `Other` and is carried but never aggregated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LineItemKind {
    Revenue,
    Cogs,
    Opex,
    #[serde(other)]
    Other,
}

impl LineItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            LineItemKind::Revenue => "Revenue",
            LineItemKind::Cogs => "COGS",
            LineItemKind::Opex => "OpEx",
            LineItemKind::Other => "Other",
        }
    }
}
