//! HTTP quote provider.
//!
//! Issues `GET <base_url>?symbol=<SYMBOL>` and reads the company name and the
//! latest price out of the JSON object in the response. Field names come from
//! [`LookupConfig`] and are otherwise opaque.

use std::str::FromStr;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use crate::config::LookupConfig;
use crate::errors::LookupError;
use crate::models::{QuoteRecord, Symbol};
use crate::provider::QuoteProvider;

const PROVIDER_ID: &str = "HTTP";

/// Quote provider backed by a JSON-over-HTTP quote service.
pub struct HttpQuoteProvider {
    client: Client,
    config: LookupConfig,
}

impl HttpQuoteProvider {
    /// Create a provider for the given configuration.
    ///
    /// The client only gets a timeout when one is configured; no headers are
    /// added beyond reqwest's defaults.
    pub fn new(config: LookupConfig) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// Send the request and return the body of a successful response.
    async fn fetch(&self, symbol: &Symbol) -> Result<String, LookupError> {
        debug!("{} quote request for {}", PROVIDER_ID, symbol);

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("symbol", symbol.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::HttpStatus(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl QuoteProvider for HttpQuoteProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_quote(&self, symbol: &Symbol) -> Result<QuoteRecord, LookupError> {
        let text = self.fetch(symbol).await?;

        let body: Value =
            serde_json::from_str(&text).map_err(|e| LookupError::Parse(e.to_string()))?;

        extract_quote(&body, symbol, &self.config)
    }
}

/// Build a [`QuoteRecord`] from a parsed response body.
///
/// The name field must be a JSON string and the price field a JSON number.
/// Anything else, including `null`, is a schema error.
pub fn extract_quote(
    body: &Value,
    symbol: &Symbol,
    config: &LookupConfig,
) -> Result<QuoteRecord, LookupError> {
    let name = body
        .get(&config.name_field)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            LookupError::Schema(format!("'{}' missing or not a string", config.name_field))
        })?;

    let price = body
        .get(&config.price_field)
        .and_then(number_to_decimal)
        .ok_or_else(|| {
            LookupError::Schema(format!("'{}' missing or not a number", config.price_field))
        })?;

    Ok(QuoteRecord::new(name.to_string(), price, symbol))
}

/// Convert a JSON number through its textual form, so `150.25` stays exactly `150.25`.
fn number_to_decimal(value: &Value) -> Option<Decimal> {
    let Value::Number(number) = value else {
        return None;
    };
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}
