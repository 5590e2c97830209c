//! Exchange error taxonomy

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while talking to the exchange
///
/// Every variant is fatal to the invocation: errors bubble up to `main`
/// unchanged and terminate the process with a non-zero exit status. Nothing
/// is retried.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// A required credential environment variable is unset
    #[error("{0} is not set (export your Biconomy API credentials first)")]
    MissingCredentials(&'static str),
    /// Network or connection failure from the HTTP client
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx HTTP response; the exchange's body is kept verbatim
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },
    /// Exchange-reported error envelope (`code` != 0)
    #[error("exchange error {code}: {message}")]
    Api { code: i64, message: String },
    /// Response body that does not decode into the expected shape
    #[error("unexpected payload: {0}")]
    Payload(String),
}
