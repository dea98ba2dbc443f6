//! Error types for the quote lookup crate.
//!
//! This module provides:
//! - [`LookupError`]: The internal taxonomy of everything that can go wrong in a lookup
//! - [`QuoteUnavailable`]: The single opaque failure handed back to callers
//! - [`ConfigError`]: Errors raised while reading configuration overrides

use thiserror::Error;

/// Errors that can occur while fetching a quote from the remote service.
///
/// These never reach callers of [`QuoteLookup::lookup`](crate::QuoteLookup::lookup);
/// they are logged and then collapsed into [`QuoteUnavailable`].
#[derive(Error, Debug)]
pub enum LookupError {
    /// The request could not be sent or the response could not be received
    /// (connection refused, DNS failure, timeout, truncated body).
    ///
    /// Holds the error with its request URL stripped.
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The remote service answered with a non-success status.
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// The response body is not valid JSON.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The response is valid JSON but lacks a required field, or the field
    /// has an unusable type.
    #[error("Unexpected response shape: {0}")]
    Schema(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.without_url())
    }
}

impl LookupError {
    /// Short, stable label for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::HttpStatus(_) => "http_status",
            Self::Parse(_) => "parse",
            Self::Schema(_) => "schema",
        }
    }
}

/// The quote could not be fetched.
///
/// Deliberately carries no detail: a missing symbol, an unreachable service
/// and a malformed payload all look the same to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Quote unavailable")]
pub struct QuoteUnavailable;

impl From<LookupError> for QuoteUnavailable {
    fn from(_: LookupError) -> Self {
        QuoteUnavailable
    }
}

/// Errors raised while building a [`LookupConfig`](crate::LookupConfig) from the environment.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable is set but its value cannot be used.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue {
        /// The variable name
        key: String,
        /// The rejected value
        value: String,
    },
}
