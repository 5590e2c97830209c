//! Configuration for biconomy-monitor
//!
//! Everything is either a compile-time constant (the monitored market) or
//! sourced from the environment at process start (API credentials). There is
//! no configuration file.

use secrecy::SecretString;

use crate::exchange::ExchangeError;

/// The monitored trading pair, in the exchange's `BASE_QUOTE` notation
pub const MARKET: &str = "MCM_USDT";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "BICONOMY_API_KEY";

/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "BICONOMY_API_SECRET";

/// Base asset label of the monitored market (e.g. `MCM`)
pub fn base_asset() -> &'static str {
    MARKET.split_once('_').map(|(base, _)| base).unwrap_or(MARKET)
}

/// Quote asset label of the monitored market (e.g. `USDT`)
pub fn quote_asset() -> &'static str {
    MARKET.split_once('_').map(|(_, quote)| quote).unwrap_or("")
}

/// API credentials for the private endpoints
///
/// The secret is held as a [`SecretString`] so it cannot leak through
/// `Debug` output or logs. Credentials live only for the duration of one
/// invocation and are never persisted.
pub struct Credentials {
    pub api_key: String,
    pub api_secret: SecretString,
}

impl Credentials {
    /// Load credentials from the environment, failing fast if either
    /// variable is missing. Called before any network I/O.
    pub fn from_env() -> Result<Self, ExchangeError> {
        Self::from_vars(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var(API_SECRET_ENV).ok(),
        )
    }

    /// Build credentials from optional values, reporting which variable is
    /// missing. Split out from [`Credentials::from_env`] so the fail-fast
    /// path is testable without mutating the process environment.
    pub fn from_vars(
        api_key: Option<String>,
        api_secret: Option<String>,
    ) -> Result<Self, ExchangeError> {
        let api_key = api_key
            .filter(|k| !k.is_empty())
            .ok_or(ExchangeError::MissingCredentials(API_KEY_ENV))?;
        let api_secret = api_secret
            .filter(|s| !s.is_empty())
            .ok_or(ExchangeError::MissingCredentials(API_SECRET_ENV))?;

        Ok(Self {
            api_key,
            api_secret: SecretString::new(api_secret),
        })
    }
}
