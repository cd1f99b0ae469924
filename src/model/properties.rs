//! Static per-element lookup tables.
//!
//! Both tables are compiled into the binary as `match` expressions, so they need
//! no initialization and can be read from any thread without synchronization.
//! Lookups are exact and case-sensitive: `"Cl"` is tabulated, `"CL"` is not.

use std::fmt;
use thiserror::Error;

/// Element symbols with a tabulated atomic weight.
pub const WEIGHTED_ELEMENTS: &[&str] = &["H", "C", "N", "O", "P", "F", "Cl", "Br"];

/// Element symbols with a tabulated display color.
pub const COLORED_ELEMENTS: &[&str] = &["H", "C", "N", "O", "P", "F", "Cl", "Br", "S"];

/// Which property table a failed lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyTable {
    Weight,
    Color,
}

impl fmt::Display for PropertyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyTable::Weight => write!(f, "atomic weight"),
            PropertyTable::Color => write!(f, "display color"),
        }
    }
}

impl PropertyTable {
    /// Symbols present in this table.
    pub fn symbols(&self) -> &'static [&'static str] {
        match self {
            PropertyTable::Weight => WEIGHTED_ELEMENTS,
            PropertyTable::Color => COLORED_ELEMENTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("element symbol '{symbol}' has no {table} entry")]
pub struct LookupError {
    pub symbol: String,
    pub table: PropertyTable,
}

impl LookupError {
    fn new(symbol: &str, table: PropertyTable) -> Self {
        Self {
            symbol: symbol.to_string(),
            table,
        }
    }
}

/// Opaque display color token, either a CSS color name or a `#RRGGBB` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(&'static str);

impl Color {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Returns the standard atomic weight (g/mol) for `symbol`.
///
/// # Errors
///
/// Returns [`LookupError`] when the symbol is not one of [`WEIGHTED_ELEMENTS`].
pub fn weight_of(symbol: &str) -> Result<f64, LookupError> {
    let weight = match symbol {
        "H" => 1.00784,
        "C" => 12.0107,
        "N" => 14.0067,
        "O" => 15.999,
        "P" => 30.973762,
        "F" => 18.998403,
        "Cl" => 35.453,
        "Br" => 79.904,
        _ => return Err(LookupError::new(symbol, PropertyTable::Weight)),
    };
    Ok(weight)
}

/// Returns the display color for `symbol`.
///
/// # Errors
///
/// Returns [`LookupError`] when the symbol is not one of [`COLORED_ELEMENTS`].
pub fn color_of(symbol: &str) -> Result<Color, LookupError> {
    let color = match symbol {
        "H" => "white",
        "C" => "#D3D3D3",
        "N" => "#add8e6",
        "O" => "red",
        "P" => "#FFA500",
        "F" => "#FFFFE0",
        "Cl" => "#98FB98",
        "Br" => "#F4A460",
        "S" => "yellow",
        _ => return Err(LookupError::new(symbol, PropertyTable::Color)),
    };
    Ok(Color(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn weight_values() {
        assert!(approx_eq(weight_of("H").unwrap(), 1.00784, 1e-9));
        assert!(approx_eq(weight_of("C").unwrap(), 12.0107, 1e-9));
        assert!(approx_eq(weight_of("O").unwrap(), 15.999, 1e-9));
        assert!(approx_eq(weight_of("Br").unwrap(), 79.904, 1e-9));
    }

    #[test]
    fn every_listed_symbol_resolves() {
        for symbol in WEIGHTED_ELEMENTS {
            assert!(weight_of(symbol).unwrap() > 0.0, "{symbol}");
        }
        for symbol in COLORED_ELEMENTS {
            assert!(!color_of(symbol).unwrap().as_str().is_empty(), "{symbol}");
        }
    }

    #[test]
    fn sulfur_has_color_but_no_weight() {
        assert_eq!(color_of("S").unwrap().as_str(), "yellow");
        let err = weight_of("S").unwrap_err();
        assert_eq!(err.symbol, "S");
        assert_eq!(err.table, PropertyTable::Weight);
    }

    #[test]
    fn lookups_are_case_sensitive() {
        assert!(weight_of("Cl").is_ok());
        assert!(weight_of("CL").is_err());
        assert!(color_of("cl").is_err());
    }

    #[test]
    fn unknown_symbol_error_message() {
        let err = color_of("Xx").unwrap_err();
        assert_eq!(
            err.to_string(),
            "element symbol 'Xx' has no display color entry"
        );
        assert_eq!(err.table.symbols(), COLORED_ELEMENTS);
    }

    #[test]
    fn color_display_matches_token() {
        let color = color_of("C").unwrap();
        assert_eq!(color.to_string(), "#D3D3D3");
    }
}
