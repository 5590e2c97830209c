//! Biconomy REST API access
//!
//! One client for the whole exchange surface: unauthenticated GETs for the
//! public market endpoints, HMAC-signed form POSTs for the private account
//! endpoints. Wire payloads are decoded into the domain types in
//! [`crate::market`] and [`crate::account`] before leaving this module.

mod auth;
mod client;
mod error;
mod types;

pub use auth::BiconomyAuth;
pub use client::{BiconomyClient, BiconomyConfig, BICONOMY_API_URL};
pub use error::ExchangeError;
