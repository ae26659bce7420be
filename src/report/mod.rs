//! Text and JSON renderings of a forecast report.

pub mod table;

use colored::Colorize;

use crate::{
    currency::{format_currency_value, CurrencyCode, FormatOptions, LocaleConfig},
    errors::Result,
    services::ForecastReport,
};

use table::{Table, TableColumn};

const LABEL_WIDTH: usize = 19;

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub locale: LocaleConfig,
    pub format: FormatOptions,
    /// Highlight negative amounts in red.
    pub color: bool,
}

pub fn render_text(report: &ForecastReport, options: &RenderOptions) -> String {
    let currency = CurrencyCode::new(report.currency.as_str());
    let money = |amount: f64| {
        format_currency_value(amount, &currency, &options.locale, &options.format)
    };
    let signed = |amount: f64| {
        let text = money(amount);
        if options.color && amount < 0.0 {
            text.red().to_string()
        } else {
            text
        }
    };

    let mut table = Table::new(vec![
        TableColumn::left("Month"),
        TableColumn::right("Revenue"),
        TableColumn::right("Expenses"),
        TableColumn::right("Net"),
        TableColumn::right("Cash"),
    ]);
    for point in &report.series {
        table.push_row(vec![
            point.month.clone(),
            money(point.revenue),
            money(point.expenses),
            signed(point.net),
            point
                .cash_balance
                .map(&signed)
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }

    let metrics = &report.metrics;
    let summary = &report.summary;
    let runway = metrics
        .cash_runway
        .map(|months| format!("{:.1} months", months))
        .unwrap_or_else(|| "N/A".to_string());

    let lines = [
        format!("Scenario: {} ({})", report.scenario, currency.as_str()),
        String::new(),
        table.render(),
        String::new(),
        metric_line("Net cash position:", signed(metrics.net_cash_position)),
        metric_line("Cash runway:", runway),
        metric_line("ARR:", money(summary.arr)),
        metric_line("Gross margin:", format!("{:.1}%", summary.gross_margin)),
        metric_line("Burn:", format!("{} / month", money(summary.burn))),
        metric_line("Runway estimate:", format!("{} months", summary.runway_months)),
    ];
    lines.join("\n")
}

fn metric_line(label: &str, value: String) -> String {
    format!("{:<width$}{}", label, value, width = LABEL_WIDTH)
}

pub fn render_json(report: &ForecastReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
