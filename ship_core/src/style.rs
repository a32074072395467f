//! # Table Cell Styles
//!
//! Conditional formatting for the saved-scenarios table, as plain data.
//! A front end maps a [`CellStyle`] onto whatever its toolkit uses.

use serde::{Deserialize, Serialize};

use crate::format::CurrencyPair;

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const MONEY_BACKGROUND: Rgb = Rgb(0xd4, 0xed, 0xda);
pub const MONEY_FOREGROUND: Rgb = Rgb(0x15, 0x57, 0x24);
pub const QUANTITY_BACKGROUND: Rgb = Rgb(0xcc, 0xe5, 0xff);
pub const QUANTITY_FOREGROUND: Rgb = Rgb(0x00, 0x40, 0x85);
pub const HEADER_BACKGROUND: Rgb = Rgb(0x34, 0x3a, 0x40);
pub const HEADER_FOREGROUND: Rgb = Rgb(0xff, 0xff, 0xff);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

/// How one cell should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellStyle {
    pub background: Option<Rgb>,
    pub foreground: Option<Rgb>,
    pub bold: bool,
    pub align: Align,
}

impl CellStyle {
    /// Centered text, no colors
    pub fn plain() -> Self {
        CellStyle::default()
    }
}

/// Green highlight for cells holding a formatted amount in either currency.
pub fn money_cell_style(text: &str, currencies: &CurrencyPair) -> CellStyle {
    if currencies.is_formatted_amount(text) {
        CellStyle {
            background: Some(MONEY_BACKGROUND),
            foreground: Some(MONEY_FOREGROUND),
            bold: true,
            align: Align::Center,
        }
    } else {
        CellStyle::plain()
    }
}

/// Blue highlight for quantities above one.
pub fn quantity_cell_style(quantity: u32) -> CellStyle {
    if quantity > 1 {
        CellStyle {
            background: Some(QUANTITY_BACKGROUND),
            foreground: Some(QUANTITY_FOREGROUND),
            bold: true,
            align: Align::Center,
        }
    } else {
        CellStyle::plain()
    }
}

/// Dark header row
pub fn header_style() -> CellStyle {
    CellStyle {
        background: Some(HEADER_BACKGROUND),
        foreground: Some(HEADER_FOREGROUND),
        bold: false,
        align: Align::Center,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_cells_highlighted() {
        let pair = CurrencyPair::default();
        let style = money_cell_style("$15.75 USD", &pair);
        assert_eq!(style.background, Some(MONEY_BACKGROUND));
        assert!(style.bold);
        assert_eq!(money_cell_style("₱661.64", &pair).foreground, Some(MONEY_FOREGROUND));
    }

    #[test]
    fn test_non_money_cells_plain() {
        let pair = CurrencyPair::default();
        assert_eq!(money_cell_style("0.1024", &pair), CellStyle::plain());
    }

    #[test]
    fn test_quantity_highlight() {
        assert_eq!(quantity_cell_style(1), CellStyle::plain());
        assert_eq!(quantity_cell_style(3).background, Some(QUANTITY_BACKGROUND));
    }

    #[test]
    fn test_header_style() {
        let style = header_style();
        assert_eq!(style.background, Some(HEADER_BACKGROUND));
        assert_eq!(style.align, Align::Center);
        assert!(!style.bold);
    }
}
