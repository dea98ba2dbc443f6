//! Lookup configuration.
//!
//! The defaults describe a single best-effort read: the fixed quote endpoint,
//! the provider's field names, and no timeout. Every value can be overridden,
//! either in code or through `QUOTE_LOOKUP_*` environment variables, so the
//! lookup can be pointed at a substitute service.

use std::time::Duration;

use crate::errors::ConfigError;

/// Quote endpoint used when nothing overrides it.
pub const DEFAULT_BASE_URL: &str = "https://cloud.iexapis.com/stable/quote";

/// Response key holding the company display name.
pub const DEFAULT_NAME_FIELD: &str = "companyName";

/// Response key holding the latest traded price.
pub const DEFAULT_PRICE_FIELD: &str = "latestPrice";

/// Overrides [`LookupConfig::base_url`].
pub const ENV_BASE_URL: &str = "QUOTE_LOOKUP_BASE_URL";
/// Overrides [`LookupConfig::timeout`], in whole seconds; `0` means no timeout.
pub const ENV_TIMEOUT_SECS: &str = "QUOTE_LOOKUP_TIMEOUT_SECS";
/// Overrides [`LookupConfig::name_field`].
pub const ENV_NAME_FIELD: &str = "QUOTE_LOOKUP_NAME_FIELD";
/// Overrides [`LookupConfig::price_field`].
pub const ENV_PRICE_FIELD: &str = "QUOTE_LOOKUP_PRICE_FIELD";

/// Settings for a quote lookup.
///
/// There is intentionally no retry setting: each lookup makes exactly one
/// request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupConfig {
    /// Endpoint the `symbol` query parameter is appended to. May already carry
    /// query parameters (e.g. an API token).
    pub base_url: String,

    /// Key of the company name in the response object.
    pub name_field: String,

    /// Key of the latest price in the response object.
    pub price_field: String,

    /// Whole-request timeout. `None` waits as long as the transport allows.
    pub timeout: Option<Duration>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            name_field: DEFAULT_NAME_FIELD.to_string(),
            price_field: DEFAULT_PRICE_FIELD.to_string(),
            timeout: None,
        }
    }
}

impl LookupConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_fields(
        mut self,
        name_field: impl Into<String>,
        price_field: impl Into<String>,
    ) -> Self {
        self.name_field = name_field.into();
        self.price_field = price_field.into();
        self
    }

    /// Defaults overridden by any `QUOTE_LOOKUP_*` variables set in the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through `var`.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = non_empty(var(ENV_BASE_URL)) {
            config.base_url = base_url;
        }
        if let Some(name_field) = non_empty(var(ENV_NAME_FIELD)) {
            config.name_field = name_field;
        }
        if let Some(price_field) = non_empty(var(ENV_PRICE_FIELD)) {
            config.price_field = price_field;
        }
        if let Some(raw) = non_empty(var(ENV_TIMEOUT_SECS)) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: ENV_TIMEOUT_SECS.to_string(),
                    value: raw.clone(),
                })?;
            // Zero disables the timeout, matching the default.
            config.timeout = (secs > 0).then_some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
