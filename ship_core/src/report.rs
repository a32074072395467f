//! # Report Output
//!
//! Text and table data derived from a scenario for display: the overview
//! summary, the capacity warning, rows of the saved-scenarios table, the
//! container fill chart, and the formula cheat sheet. Everything here is a
//! pure function of its arguments.

use serde::{Deserialize, Serialize};

use crate::calculations::{ScenarioInput, ScenarioResult};
use crate::format::CurrencyPair;
use crate::history::HistoryLog;
use crate::style::{money_cell_style, quantity_cell_style, CellStyle};

/// Formula cheat sheet shown under the calculator
pub const FORMULAS: &[&str] = &[
    "CBM per item = (length_in × width_in × height_in) / 61,023",
    "Total CBM = CBM per item × quantity",
    "Freight per CBM = freight cost / freight coverage CBM",
    "Freight per item = CBM per item × freight per CBM",
    "Total freight = total CBM × freight per CBM",
    "Target amount = source amount × exchange rate",
    "Items per container = floor(container CBM / CBM per item)",
    "Over capacity: full containers = quantity ÷ items per container, leftover = the remainder",
];

/// Numbered cheat sheet, one formula per line.
pub fn formulas_text() -> String {
    FORMULAS
        .iter()
        .enumerate()
        .map(|(i, f)| format!("{}. {}", i + 1, f))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Warning shown when the quantity does not fit in one container.
pub fn capacity_warning(result: &ScenarioResult) -> Option<String> {
    if !result.capacity_exceeded {
        return None;
    }
    Some(format!(
        "Quantity exceeds single container capacity! You need {} full container(s) + {} item(s) leftover.",
        result.full_containers, result.leftover_items
    ))
}

/// Multi-line scenario overview.
pub fn summary(input: &ScenarioInput, result: &ScenarioResult, currencies: &CurrencyPair) -> String {
    let mut lines = vec![
        format!(
            "Exchange rate: 1 {} = {}",
            currencies.source.short_name(),
            currencies.target(input.exchange_rate)
        ),
        format!(
            "Freight: {} per {} CBM",
            currencies.source(input.freight_cost),
            input.freight_coverage_cbm
        ),
        format!(
            "Item dimensions: {}h × {}w × {}l inches",
            input.height_in, input.width_in, input.length_in
        ),
        format!("Quantity: {}", input.quantity),
        String::new(),
        format!("CBM per item: {:.4} CBM", result.cbm_per_item),
        format!("Total CBM: {:.4} CBM", result.total_cbm),
        String::new(),
        format!("Freight per CBM: {}", currencies.both(&result.freight_per_cbm)),
        format!("Freight per item: {}", currencies.both(&result.freight_per_item)),
        format!("Total freight: {}", currencies.both(&result.total_freight)),
        String::new(),
        format!("Items per container: {}", result.items_per_container),
        format!("Containers needed: {}", result.containers_needed()),
    ];
    if let Some(warning) = capacity_warning(result) {
        lines.push(warning);
    }
    lines.join("\n")
}

/// Column headers of the saved-scenarios table.
pub fn history_columns(currencies: &CurrencyPair) -> Vec<String> {
    let source = currencies.source.short_name();
    let target = currencies.target.short_name();
    vec![
        "Length (in)".to_string(),
        "Width (in)".to_string(),
        "Height (in)".to_string(),
        "CBM/Item".to_string(),
        "Quantity".to_string(),
        "Total CBM".to_string(),
        format!("Freight/Item ({})", target),
        format!("Freight/Item ({})", source),
        format!("Total Freight ({})", target),
        format!("Total Freight ({})", source),
    ]
}

/// One table cell: display text plus its style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    pub text: String,
    pub style: CellStyle,
}

impl TableCell {
    fn plain(text: impl Into<String>) -> Self {
        TableCell {
            text: text.into(),
            style: CellStyle::plain(),
        }
    }

    fn money(text: String, currencies: &CurrencyPair) -> Self {
        let style = money_cell_style(&text, currencies);
        TableCell { text, style }
    }
}

/// Rows of the saved-scenarios table, oldest first.
pub fn history_rows(log: &HistoryLog, currencies: &CurrencyPair) -> Vec<Vec<TableCell>> {
    log.all()
        .map(|entry| {
            let input = &entry.input;
            let result = &entry.result;
            vec![
                TableCell::plain(input.length_in.to_string()),
                TableCell::plain(input.width_in.to_string()),
                TableCell::plain(input.height_in.to_string()),
                TableCell::plain(format!("{:.4}", result.cbm_per_item)),
                TableCell {
                    text: input.quantity.to_string(),
                    style: quantity_cell_style(input.quantity),
                },
                TableCell::plain(format!("{:.4}", result.total_cbm)),
                TableCell::money(currencies.target(result.freight_per_item.target), currencies),
                TableCell::money(currencies.source(result.freight_per_item.source), currencies),
                TableCell::money(currencies.target(result.total_freight.target), currencies),
                TableCell::money(currencies.source(result.total_freight.source), currencies),
            ]
        })
        .collect()
}

/// Two-series bar chart data for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Fill level of one container, 0..=100
    pub fill_percent: f64,

    /// Items beyond what one container holds
    pub overflow_items: u64,
}

impl ChartData {
    pub const FILL_LABEL: &'static str = "Container Fill (%)";
    pub const OVERFLOW_LABEL: &'static str = "Leftover Items";

    pub fn from_result(result: &ScenarioResult) -> Self {
        ChartData {
            fill_percent: result.container_fill_percent.clamp(0.0, 100.0),
            overflow_items: result.overflow_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::compute;
    use crate::history::HistoryEntry;

    #[test]
    fn test_summary_default_scenario() {
        let input = ScenarioInput::default();
        let result = compute(&input).unwrap();
        let text = summary(&input, &result, &CurrencyPair::default());

        assert!(text.contains("Exchange rate: 1 USD = ₱42.00"));
        assert!(text.contains("Freight: $769.00 USD per 5 CBM"));
        assert!(text.contains("Item dimensions: 25h × 25w × 10l inches"));
        assert!(text.contains("CBM per item: 0.1024 CBM"));
        assert!(text.contains("Total CBM: 0.3073 CBM"));
        assert!(text.contains("Freight per CBM: $153.80 USD ≈ ₱6,459.60"));
        assert!(text.contains("Items per container: 48"));
        assert!(text.contains("Containers needed: 1"));
        assert!(!text.contains("exceeds"));
    }

    #[test]
    fn test_capacity_warning() {
        let input = ScenarioInput::default().with_quantity(60);
        let result = compute(&input).unwrap();
        assert_eq!(
            capacity_warning(&result).as_deref(),
            Some("Quantity exceeds single container capacity! You need 1 full container(s) + 12 item(s) leftover.")
        );
        let text = summary(&input, &result, &CurrencyPair::default());
        assert!(text.contains("Containers needed: 2"));
        assert!(text.ends_with("12 item(s) leftover."));
    }

    #[test]
    fn test_no_warning_within_capacity() {
        let result = compute(&ScenarioInput::default()).unwrap();
        assert!(capacity_warning(&result).is_none());
    }

    #[test]
    fn test_history_rows() {
        let pair = CurrencyPair::default();
        let mut log = HistoryLog::new();
        for quantity in [1, 60] {
            let input = ScenarioInput::default().with_quantity(quantity);
            log.append(HistoryEntry::new(input, compute(&input).unwrap()));
        }

        let columns = history_columns(&pair);
        let rows = history_rows(&log, &pair);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.len() == columns.len()));

        assert_eq!(columns[7], "Freight/Item (USD)");
        assert_eq!(rows[0][0].text, "10");
        assert_eq!(rows[0][3].text, "0.1024");
        assert_eq!(rows[0][4].style, CellStyle::plain());
        assert_eq!(rows[1][4].text, "60");
        assert!(rows[1][4].style.bold);
        assert!(rows[1][7].text.starts_with('$'));
        assert!(rows[1][7].style.background.is_some());
    }

    #[test]
    fn test_chart_data() {
        let under = ChartData::from_result(&compute(&ScenarioInput::default()).unwrap());
        assert_eq!(under.fill_percent, 6.25);
        assert_eq!(under.overflow_items, 0);

        let over = ChartData::from_result(&compute(&ScenarioInput::default().with_quantity(60)).unwrap());
        assert_eq!(over.fill_percent, 100.0);
        assert_eq!(over.overflow_items, 12);
    }

    #[test]
    fn test_formulas_text() {
        let text = formulas_text();
        assert!(text.starts_with("1. CBM per item"));
        assert_eq!(text.lines().count(), FORMULAS.len());
    }
}
