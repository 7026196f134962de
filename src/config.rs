//! Client configuration parsed from environment variables.
//!
//! Native embedders read the process environment at runtime
//! ([`ClientConfig::from_env`]); the browser build bakes values in at compile
//! time ([`ClientConfig::from_build_env`]).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ConfigError;

pub const API_URL_VAR: &str = "GERENCIADOR_API_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "GERENCIADOR_REQUEST_TIMEOUT_SECS";
pub const CONNECT_TIMEOUT_VAR: &str = "GERENCIADOR_CONNECT_TIMEOUT_SECS";
pub const CLEAR_ON_FORBIDDEN_VAR: &str = "GERENCIADOR_CLEAR_SESSION_ON_FORBIDDEN";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin (plus optional path prefix), without trailing `/`.
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Treat `403` on an authenticated request as session rejection, in
    /// addition to `401`.
    pub clear_session_on_forbidden: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            clear_session_on_forbidden: false,
        }
    }
}

impl ClientConfig {
    /// Build typed client config from process environment variables.
    ///
    /// Optional:
    /// - `GERENCIADOR_API_URL`: default `http://localhost:8080`
    /// - `GERENCIADOR_REQUEST_TIMEOUT_SECS`: default 30
    /// - `GERENCIADOR_CONNECT_TIMEOUT_SECS`: default 10
    /// - `GERENCIADOR_CLEAR_SESSION_ON_FORBIDDEN`: default false
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the API URL is not http(s).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from variables captured when the WASM bundle was compiled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the API URL is not http(s).
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                API_URL_VAR => option_env!("GERENCIADOR_API_URL"),
                CLEAR_ON_FORBIDDEN_VAR => option_env!("GERENCIADOR_CLEAR_SESSION_ON_FORBIDDEN"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = match lookup(API_URL_VAR) {
            Some(raw) => normalize_base_url(&raw)?,
            None => DEFAULT_API_BASE_URL.to_owned(),
        };
        let parse_secs = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };

        Ok(Self {
            api_base_url,
            request_timeout_secs: parse_secs(REQUEST_TIMEOUT_VAR, DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout_secs: parse_secs(CONNECT_TIMEOUT_VAR, DEFAULT_CONNECT_TIMEOUT_SECS),
            clear_session_on_forbidden: lookup(CLEAR_ON_FORBIDDEN_VAR)
                .and_then(|raw| parse_bool(&raw))
                .unwrap_or(false),
        })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    if !has_host {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

