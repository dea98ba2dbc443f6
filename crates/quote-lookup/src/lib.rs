//! Quote Lookup Crate
//!
//! Fetches the latest quote for a ticker symbol from a JSON quote service and
//! returns a normalized record, or a single opaque failure.
//!
//! # Overview
//!
//! ```text
//!   "aapl" --> Symbol ("AAPL") --> QuoteProvider --> GET base_url?symbol=AAPL
//!                                        |
//!                     +------------------+------------------+
//!                     v                                     v
//!      QuoteRecord { name, price, symbol }          QuoteUnavailable
//! ```
//!
//! Every lookup is one request: no retries, no caching, and no timeout unless
//! [`LookupConfig::timeout`] is set. Transport errors, error statuses,
//! unparsable bodies and missing fields are logged through `tracing` with
//! their [`LookupError`] kind and then reported to the caller as the same
//! [`QuoteUnavailable`] value.
//!
//! # Core Types
//!
//! - [`QuoteLookup`] - Performs lookups through a [`QuoteProvider`]
//! - [`LookupConfig`] - Endpoint, response field names and optional timeout
//! - [`QuoteRecord`] - Company name, latest price and uppercase symbol
//! - [`Symbol`] - Uppercase-normalized ticker

pub mod config;
pub mod errors;
pub mod lookup;
pub mod models;
pub mod provider;

pub use config::{LookupConfig, DEFAULT_BASE_URL, DEFAULT_NAME_FIELD, DEFAULT_PRICE_FIELD};
pub use errors::{ConfigError, LookupError, QuoteUnavailable};
pub use lookup::{lookup, lookup_with, QuoteLookup};
pub use models::{QuoteRecord, Symbol};
pub use provider::{HttpQuoteProvider, QuoteProvider};
