//! Preview-server configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5175;
pub const DEFAULT_DIST_DIR: &str = "client/dist";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid { var: &'static str, value: String, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the built client (`index.html`, wasm, assets).
    pub dist_dir: PathBuf,
    /// Origin of the REST backend; `/api/*` is forwarded here verbatim.
    pub backend_url: String,
    pub proxy_timeout: Duration,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 5175
    /// - `DIST_DIR`: default `client/dist`
    /// - `BACKEND_URL`: default `http://localhost:5000`
    /// - `PROXY_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let host = var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: raw,
                reason: "expected a port number",
            })?,
            None => DEFAULT_PORT,
        };
        let dist_dir = PathBuf::from(var("DIST_DIR").unwrap_or_else(|| DEFAULT_DIST_DIR.to_owned()));
        let backend_url = parse_backend_url(var("BACKEND_URL"))?;
        let proxy_timeout = match var("PROXY_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "PROXY_TIMEOUT_SECS",
                        value: raw,
                        reason: "expected a positive number of seconds",
                    });
                }
            },
            None => Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS),
        };

        Ok(Self { host, port, dist_dir, backend_url, proxy_timeout })
    }

    /// `host:port` for the listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_backend_url(raw: Option<String>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_BACKEND_URL.to_owned());
    };
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::Invalid { var: "BACKEND_URL", value: raw, reason: "expected an http(s) URL" });
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
