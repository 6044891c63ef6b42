use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{configuration_error, Error};

const DEFAULT_API_BASE: &str = "maps.googleapis.com";
const DEFAULT_ROUTE_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub route_timeout: Duration,
    pub bind_address: SocketAddr,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_base", &self.api_base)
            .field("route_timeout", &self.route_timeout)
            .field("bind_address", &self.bind_address)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Reads the process environment, after loading `.env` if present.
    #[tracing::instrument]
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GOOGLE_MAPS_API_KEY")
            .as_deref()
            .and_then(clean_api_key)
            .ok_or_else(|| configuration_error("GOOGLE_MAPS_API_KEY is missing or invalid"))?;

        let api_base = lookup("GOOGLE_MAPS_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.into());

        let route_timeout = match lookup("ROUTE_TIMEOUT_MS") {
            Some(value) => Duration::from_millis(value.trim().parse::<u64>()?),
            None => Duration::from_millis(DEFAULT_ROUTE_TIMEOUT_MS),
        };

        let bind_address: SocketAddr = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.into())
            .parse()?;

        Ok(Self {
            api_key,
            api_base,
            route_timeout,
            bind_address,
        })
    }
}

/// Normalizes a credential pasted into an environment file: trims it, strips
/// one pair of surrounding quotes and rejects placeholder values.
pub fn clean_api_key(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix(|c: char| c == '"' || c == '\'')
        .unwrap_or(trimmed);
    let unquoted = unquoted
        .strip_suffix(|c: char| c == '"' || c == '\'')
        .unwrap_or(unquoted);

    match unquoted {
        "" | "undefined" | "null" => None,
        key => Some(key.to_string()),
    }
}
