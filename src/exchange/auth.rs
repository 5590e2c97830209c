//! Request signing for the private endpoints
//!
//! Biconomy's scheme: sort all request parameters (including `api_key` and
//! the millisecond `timestamp`) by key, join them as `key=value` pairs with
//! `&`, append `&secret_key=<API_SECRET>`, HMAC-SHA256 the result keyed by
//! the secret, and send the uppercase hex digest as the `sign` parameter.
//! Values enter the canonical string raw; URL encoding happens later in the
//! form body and is not part of what gets signed.

use hmac::{Hmac, Mac};
use secrecy::ExposeSecret;
use sha2::Sha256;
use std::collections::BTreeMap;

use crate::config::Credentials;

type HmacSha256 = Hmac<Sha256>;

/// Signs private requests with the account's API credentials
pub struct BiconomyAuth {
    credentials: Credentials,
}

impl BiconomyAuth {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn api_key(&self) -> &str {
        &self.credentials.api_key
    }

    /// Compute the signature over an already-complete parameter map
    ///
    /// The map must contain every parameter that will be sent except `sign`
    /// itself. Deterministic for a fixed secret and parameter set: the
    /// BTreeMap gives the sorted order the scheme requires regardless of
    /// insertion order.
    pub fn sign(&self, params: &BTreeMap<String, String>) -> String {
        let encoded = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        let secret = self.credentials.api_secret.expose_secret();
        let signing_string = format!("{}&secret_key={}", encoded, secret);

        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(signing_string.as_bytes());
        hex::encode(mac.finalize().into_bytes()).to_uppercase()
    }

    /// Build the final form body for a private request: the caller's
    /// parameters plus `api_key`, `timestamp` (milliseconds), and `sign`.
    pub fn signed_form(
        &self,
        mut params: BTreeMap<String, String>,
        timestamp_ms: i64,
    ) -> BTreeMap<String, String> {
        params.insert("api_key".to_string(), self.credentials.api_key.clone());
        params.insert("timestamp".to_string(), timestamp_ms.to_string());
        let signature = self.sign(&params);
        params.insert("sign".to_string(), signature);
        params
    }
}
