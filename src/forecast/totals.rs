use crate::model::{LineItem, LineItemKind};

/// Running sums per aggregated line item category.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KindTotals {
    pub revenue: f64,
    pub cogs: f64,
    pub opex: f64,
}

impl KindTotals {
    /// Totals of every item's value at `month`; short items contribute nothing.
    pub fn for_month(items: &[LineItem], month: usize) -> Self {
        let mut totals = Self::default();
        for item in items {
            totals.add(item.kind, item.value_at(month));
        }
        totals
    }

    /// Totals of every value every item carries, whatever its length.
    pub fn over_items(items: &[LineItem]) -> Self {
        let mut totals = Self::default();
        for item in items {
            for value in &item.monthly_values {
                totals.add(item.kind, *value);
            }
        }
        totals
    }

    pub fn add(&mut self, kind: LineItemKind, value: f64) {
        match kind {
            LineItemKind::Revenue => self.revenue += value,
            LineItemKind::Cogs => self.cogs += value,
            LineItemKind::Opex => self.opex += value,
            LineItemKind::Other => {}
        }
    }

    pub fn expenses(&self) -> f64 {
        self.cogs + self.opex
    }

    pub fn net(&self) -> f64 {
        self.revenue - self.expenses()
    }
}
