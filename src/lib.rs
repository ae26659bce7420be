#![doc(test(attr(deny(warnings))))]

//! Cashflow Core turns a business's planned revenue, costs and one-off cash
//! events into a monthly cashflow forecast and the KPIs derived from it.
//!
//! ```
//! use cashflow_core::forecast::{build_series, summarize_metrics};
//! use cashflow_core::model::{LineItem, LineItemKind};
//!
//! let items = vec![
//!     LineItem::new(LineItemKind::Revenue, "Sales", vec![100.0; 12]),
//!     LineItem::new(LineItemKind::Cogs, "Hosting", vec![60.0; 12]),
//!     LineItem::new(LineItemKind::Opex, "Payroll", vec![60.0; 12]),
//! ];
//! let series = build_series(&items);
//! assert_eq!(series[0].net, -20.0);
//! assert_eq!(summarize_metrics(&items).arr, 1200.0);
//! ```

pub mod config;
pub mod currency;
pub mod errors;
pub mod forecast;
pub mod model;
pub mod report;
pub mod scenario;
pub mod services;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Cashflow Core tracing initialized.");
    });
}
