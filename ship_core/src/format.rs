//! # Money Formatting
//!
//! Amounts are shown as a currency symbol, a thousands-grouped value with
//! two decimals, and an optional trailing currency code:
//!
//! ```rust
//! use ship_core::format::Currency;
//!
//! let usd = Currency::new("$", Some("USD"));
//! assert_eq!(usd.format(1234.5), "$1,234.50 USD");
//!
//! let php = Currency::new("₱", None);
//! assert_eq!(php.format(661.64), "₱661.64");
//! ```
//!
//! The calculator does not know which real currencies it converts between.
//! A [`CurrencyPair`] names a "source" currency (freight is quoted in it)
//! and a "target" currency (reached through the exchange rate).

use serde::{Deserialize, Serialize};

use crate::calculations::Amount;

/// Display settings for one currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Prefix symbol, e.g. "$"
    pub symbol: String,

    /// Optional code appended after the amount, e.g. "USD"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Currency {
    pub fn new(symbol: impl Into<String>, code: Option<&str>) -> Self {
        Currency {
            symbol: symbol.into(),
            code: code.map(str::to_string),
        }
    }

    /// Format an amount with symbol, grouping, two decimals and code.
    pub fn format(&self, amount: f64) -> String {
        let sign = if amount < 0.0 { "-" } else { "" };
        let mut out = format!("{}{}{}", sign, self.symbol, group_thousands(amount.abs(), 2));
        if let Some(code) = &self.code {
            out.push(' ');
            out.push_str(code);
        }
        out
    }

    /// Short name for column headers: the code if there is one, else the symbol.
    pub fn short_name(&self) -> &str {
        self.code.as_deref().unwrap_or(&self.symbol)
    }

    /// Whether `text` looks like an amount formatted with this currency
    pub fn is_formatted_amount(&self, text: &str) -> bool {
        let text = text.strip_prefix('-').unwrap_or(text);
        !self.symbol.is_empty() && text.starts_with(self.symbol.as_str())
    }
}

/// The two currencies of a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Currency the freight is quoted in
    pub source: Currency,

    /// Currency amounts are converted into
    pub target: Currency,
}

impl Default for CurrencyPair {
    fn default() -> Self {
        CurrencyPair {
            source: Currency::new("$", Some("USD")),
            target: Currency::new("₱", None),
        }
    }
}

impl CurrencyPair {
    /// Format the source side of an amount
    pub fn source(&self, amount: f64) -> String {
        self.source.format(amount)
    }

    /// Format the target side of an amount
    pub fn target(&self, amount: f64) -> String {
        self.target.format(amount)
    }

    /// "source ≈ target" for a converted amount
    pub fn both(&self, amount: &Amount) -> String {
        format!("{} ≈ {}", self.source(amount.source), self.target(amount.target))
    }

    /// Whether `text` is an amount in either currency
    pub fn is_formatted_amount(&self, text: &str) -> bool {
        self.source.is_formatted_amount(text) || self.target.is_formatted_amount(text)
    }
}

/// Format a non-negative number with `decimals` places and comma thousands separators.
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3 + decimals + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0, 2), "0.00");
        assert_eq!(group_thousands(999.999, 2), "1,000.00");
        assert_eq!(group_thousands(1234567.891, 2), "1,234,567.89");
        assert_eq!(group_thousands(100000.0, 0), "100,000");
        assert_eq!(group_thousands(12.5, 4), "12.5000");
    }

    #[test]
    fn test_currency_format() {
        let pair = CurrencyPair::default();
        assert_eq!(pair.source(769.0), "$769.00 USD");
        assert_eq!(pair.target(32298.0), "₱32,298.00");
        assert_eq!(pair.source(-5.0), "-$5.00 USD");
    }

    #[test]
    fn test_both() {
        let pair = CurrencyPair::default();
        let amount = Amount::convert(153.8, 42.0);
        assert_eq!(pair.both(&amount), "$153.80 USD ≈ ₱6,459.60");
    }

    #[test]
    fn test_is_formatted_amount() {
        let pair = CurrencyPair::default();
        assert!(pair.is_formatted_amount("$47.26 USD"));
        assert!(pair.is_formatted_amount("₱1,984.79"));
        assert!(!pair.is_formatted_amount("0.1024"));
    }

    #[test]
    fn test_currency_without_code_serializes_compactly() {
        let json = serde_json::to_string(&Currency::new("€", None)).unwrap();
        assert_eq!(json, r#"{"symbol":"€"}"#);
        let parsed: Currency = serde_json::from_str(r#"{"symbol":"£","code":"GBP"}"#).unwrap();
        assert_eq!(parsed.short_name(), "GBP");
    }
}
