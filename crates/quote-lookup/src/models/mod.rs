//! Value types produced and consumed by a lookup.

mod quote;
mod symbol;

pub use quote::QuoteRecord;
pub use symbol::Symbol;
