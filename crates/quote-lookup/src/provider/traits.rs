//! Quote provider trait definition.

use async_trait::async_trait;

use crate::errors::LookupError;
use crate::models::{QuoteRecord, Symbol};

/// A source of latest quotes.
///
/// [`QuoteLookup`](crate::QuoteLookup) talks to the remote service only through
/// this trait, so tests and embedding applications can substitute their own.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use quote_lookup::{LookupError, QuoteProvider, QuoteRecord, Symbol};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl QuoteProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch_quote(&self, symbol: &Symbol) -> Result<QuoteRecord, LookupError> {
///         Ok(QuoteRecord::new("Example Corp".to_string(), 1.into(), symbol))
///     }
/// }
/// ```
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Constant identifier used in log lines, e.g. "HTTP".
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for an already-normalized symbol.
    ///
    /// Implementations make a single attempt. The returned record's `symbol`
    /// must be the one passed in, not whatever the source echoes back.
    async fn fetch_quote(&self, symbol: &Symbol) -> Result<QuoteRecord, LookupError>;
}
