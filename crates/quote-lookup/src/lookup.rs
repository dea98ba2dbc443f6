//! The lookup operation exposed to callers.
//!
//! A lookup is one attempt: normalize the symbol, ask the provider, and either
//! return the record or [`QuoteUnavailable`]. The cause of a failure is logged
//! here and then dropped.

use std::sync::Arc;

use tracing::warn;

use crate::config::LookupConfig;
use crate::errors::QuoteUnavailable;
use crate::models::{QuoteRecord, Symbol};
use crate::provider::{HttpQuoteProvider, QuoteProvider};

/// Looks up latest quotes by ticker symbol.
///
/// Holds no mutable state, so a single instance can serve concurrent callers.
/// Nothing is cached between calls.
#[derive(Clone)]
pub struct QuoteLookup {
    provider: Arc<dyn QuoteProvider>,
}

impl QuoteLookup {
    /// Lookup against the HTTP quote service described by `config`.
    pub fn new(config: LookupConfig) -> Self {
        Self::with_provider(Arc::new(HttpQuoteProvider::new(config)))
    }

    /// Lookup against any quote provider.
    pub fn with_provider(provider: Arc<dyn QuoteProvider>) -> Self {
        Self { provider }
    }

    /// Fetch the latest quote for `symbol`.
    ///
    /// The symbol is uppercased before use. Transport failures, error
    /// statuses, unparsable bodies and missing fields all yield
    /// [`QuoteUnavailable`].
    pub async fn lookup(&self, symbol: &str) -> Result<QuoteRecord, QuoteUnavailable> {
        let symbol = Symbol::new(symbol);

        match self.provider.fetch_quote(&symbol).await {
            Ok(record) => Ok(record),
            Err(e) => {
                warn!(
                    "{} quote lookup failed for {} ({}): {}",
                    self.provider.id(),
                    symbol,
                    e.kind(),
                    e
                );
                Err(e.into())
            }
        }
    }
}

/// Fetch the latest quote for `symbol` from the default quote service.
pub async fn lookup(symbol: &str) -> Result<QuoteRecord, QuoteUnavailable> {
    lookup_with(LookupConfig::default(), symbol).await
}

/// Fetch the latest quote for `symbol` using an explicit configuration.
pub async fn lookup_with(
    config: LookupConfig,
    symbol: &str,
) -> Result<QuoteRecord, QuoteUnavailable> {
    QuoteLookup::new(config).lookup(symbol).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LookupError;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    type Outcome = fn(&Symbol) -> Result<QuoteRecord, LookupError>;

    /// Records the symbols it was asked for and replays scripted outcomes.
    struct ScriptedProvider {
        seen: Mutex<Vec<String>>,
        outcome: Outcome,
    }

    impl ScriptedProvider {
        fn new(outcome: Outcome) -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
                outcome,
            })
        }
    }

    #[async_trait]
    impl QuoteProvider for ScriptedProvider {
        fn id(&self) -> &'static str {
            "SCRIPTED"
        }

        async fn fetch_quote(&self, symbol: &Symbol) -> Result<QuoteRecord, LookupError> {
            self.seen.lock().unwrap().push(symbol.to_string());
            (self.outcome)(symbol)
        }
    }

    #[tokio::test]
    async fn test_lookup_normalizes_before_fetch() {
        let provider = ScriptedProvider::new(|symbol| {
            Ok(QuoteRecord::new("Apple Inc.".to_string(), dec!(150.25), symbol))
        });
        let lookup = QuoteLookup::with_provider(provider.clone());

        let lower = lookup.lookup("aapl").await.unwrap();
        let upper = lookup.lookup("AAPL").await.unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower.symbol, "AAPL");
        assert_eq!(*provider.seen.lock().unwrap(), vec!["AAPL", "AAPL"]);
    }

    #[tokio::test]
    async fn test_lookup_collapses_every_failure() {
        let failures: [Outcome; 4] = [
            |_| Err(LookupError::HttpStatus(404)),
            |_| Err(LookupError::HttpStatus(500)),
            |_| Err(LookupError::Parse("expected value at line 1".to_string())),
            |_| Err(LookupError::Schema("'latestPrice' missing".to_string())),
        ];

        for outcome in failures {
            let lookup = QuoteLookup::with_provider(ScriptedProvider::new(outcome));
            assert_eq!(lookup.lookup("aapl").await, Err(QuoteUnavailable));
        }
    }
}
