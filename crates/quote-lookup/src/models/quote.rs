use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Normalized result of a successful lookup
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Company display name
    pub name: String,

    /// Latest traded price
    pub price: Decimal,

    /// Uppercase ticker the quote was requested for
    pub symbol: String,
}

impl QuoteRecord {
    pub fn new(name: String, price: Decimal, symbol: &Symbol) -> Self {
        Self {
            name,
            price,
            symbol: symbol.as_str().to_string(),
        }
    }
}
