//! Quote provider abstraction and the HTTP implementation.
//!
//! This module contains:
//! - The `QuoteProvider` trait that every quote source implements
//! - `HttpQuoteProvider`, which reads quotes from the configured JSON endpoint

mod traits;

pub mod http;

// Re-exports
pub use http::HttpQuoteProvider;
pub use traits::QuoteProvider;
