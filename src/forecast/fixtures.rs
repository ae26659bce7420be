use crate::model::{LineItem, LineItemKind};

/// An item holding the same value for every month.
pub(crate) fn flat(kind: LineItemKind, value: f64, months: usize) -> LineItem {
    LineItem::new(kind, kind.label(), vec![value; months])
}

/// Revenue 100, cogs 60 and opex 60 every month for a year.
pub(crate) fn baseline() -> Vec<LineItem> {
    vec![
        flat(LineItemKind::Revenue, 100.0, 12),
        flat(LineItemKind::Cogs, 60.0, 12),
        flat(LineItemKind::Opex, 60.0, 12),
    ]
}
