//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching quote or NAV data.
///
/// Every variant is a per-item failure: batch flows log the error and
/// omit the item rather than aborting (see [`crate::client::NavClient`]).
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The request to the endpoint exceeded the bounded timeout.
    /// The item is dropped for this fetch pass; there is no retry.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A network error occurred while communicating with the endpoint.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered, but the payload could not be decoded
    /// into the expected shape.
    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        /// The provider that returned the payload
        provider: String,
        /// What failed to decode
        message: String,
    },

    /// The endpoint reported no data for the requested code.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider does not implement the requested operation.
    #[error("Operation '{operation}' not supported by provider: {provider}")]
    NotSupported {
        /// The unsupported operation
        operation: String,
        /// The provider it was requested from
        provider: String,
    },
}

impl MarketDataError {
    /// Map a transport error, classifying timeouts separately so a hung
    /// endpoint is distinguishable from a refused connection.
    pub fn from_transport(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else {
            Self::Network(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display() {
        let error = MarketDataError::Timeout {
            provider: "EASTMONEY".to_string(),
        };
        assert_eq!(format!("{}", error), "Timeout: EASTMONEY");
    }

    #[test]
    fn test_malformed_response_display() {
        let error = MarketDataError::MalformedResponse {
            provider: "TTFUND".to_string(),
            message: "missing jsonp wrapper".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Malformed response from TTFUND: missing jsonp wrapper"
        );
    }

    #[test]
    fn test_symbol_not_found_display() {
        let error = MarketDataError::SymbolNotFound("000000".to_string());
        assert_eq!(format!("{}", error), "Symbol not found: 000000");
    }

    #[test]
    fn test_not_supported_display() {
        let error = MarketDataError::NotSupported {
            operation: "index_quote".to_string(),
            provider: "TTFUND".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Operation 'index_quote' not supported by provider: TTFUND"
        );
    }
}
