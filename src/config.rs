//! Gateway configuration loaded from environment variables.

use eyre::WrapErr;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_LISTEN_PORT: u16 = 3000;
const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
const DEFAULT_STATIC_DIR: &str = "public";

/// Outbound client configuration for the voting backend.
///
/// Timeouts are `None` unless explicitly configured, in which case the
/// transport defaults apply.
///
/// # Environment Variables
///
/// - `BACKEND_URL` - Backend base address (default: `http://localhost:8080`)
/// - `BACKEND_CONNECT_TIMEOUT_MS` - Connection establishment timeout (default: unset)
/// - `BACKEND_REQUEST_TIMEOUT_MS` - Total per-request timeout (default: unset)
#[derive(Clone, Debug, PartialEq)]
pub struct BackendConfig {
    /// Backend base address
    pub base_url: String,
    /// Connection establishment timeout
    pub connect_timeout: Option<Duration>,
    /// Total per-request timeout
    pub request_timeout: Option<Duration>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.into(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

impl BackendConfig {
    /// Returns a copy of this config pointing at another base address.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: lookup("BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.into()),
            connect_timeout: millis(lookup("BACKEND_CONNECT_TIMEOUT_MS")),
            request_timeout: millis(lookup("BACKEND_REQUEST_TIMEOUT_MS")),
        }
    }
}

fn millis(value: Option<String>) -> Option<Duration> {
    value
        .and_then(|v| v.parse().ok())
        .map(Duration::from_millis)
}

/// Server configuration.
///
/// Load from environment with [`Config::from_env`], or use [`Config::default`]
/// for development defaults.
///
/// # Environment Variables
///
/// - `LISTEN_ADDR` - HTTP server bind address (default: `0.0.0.0:3000`)
/// - `STATIC_DIR` - Directory holding the entry page and assets (default: `public`)
///
/// See [`BackendConfig`] for backend-specific environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub backend: BackendConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_LISTEN_PORT)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            backend: BackendConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is present but is not a socket address.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let defaults = Self::default();

        let listen_addr = match lookup("LISTEN_ADDR") {
            Some(addr) => addr
                .parse::<SocketAddr>()
                .wrap_err_with(|| format!("Invalid LISTEN_ADDR: {addr}"))?,
            None => defaults.listen_addr,
        };

        Ok(Self {
            listen_addr,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            backend: BackendConfig::from_lookup(&lookup),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_config_default_listen_addr() {
        let config = Config::default();
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_config_default_backend_url() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_config_default_has_no_timeouts() {
        let config = Config::default();
        assert_eq!(config.backend.connect_timeout, None);
        assert_eq!(config.backend.request_timeout, None);
    }

    #[test]
    fn test_config_default_static_dir() {
        let config = Config::default();
        assert_eq!(config.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_from_lookup_empty_matches_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        let defaults = Config::default();
        assert_eq!(config.listen_addr, defaults.listen_addr);
        assert_eq!(config.static_dir, defaults.static_dir);
        assert_eq!(config.backend, defaults.backend);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("LISTEN_ADDR", "127.0.0.1:4000"),
            ("BACKEND_URL", "http://voting:9090"),
            ("STATIC_DIR", "/srv/www"),
            ("BACKEND_CONNECT_TIMEOUT_MS", "250"),
            ("BACKEND_REQUEST_TIMEOUT_MS", "5000"),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr.port(), 4000);
        assert_eq!(config.backend.base_url, "http://voting:9090");
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
        assert_eq!(
            config.backend.connect_timeout,
            Some(Duration::from_millis(250))
        );
        assert_eq!(
            config.backend.request_timeout,
            Some(Duration::from_millis(5000))
        );
    }

    #[test]
    fn test_from_lookup_invalid_listen_addr() {
        let result = Config::from_lookup(lookup_from(&[("LISTEN_ADDR", "not-an-addr")]));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("LISTEN_ADDR"));
    }

    #[test]
    fn test_from_lookup_unparseable_timeout_is_unset() {
        let config =
            Config::from_lookup(lookup_from(&[("BACKEND_REQUEST_TIMEOUT_MS", "soon")])).unwrap();
        assert_eq!(config.backend.request_timeout, None);
    }

    #[test]
    fn test_backend_config_with_base_url() {
        let backend = BackendConfig::default().with_base_url("http://127.0.0.1:1");
        assert_eq!(backend.base_url, "http://127.0.0.1:1");
        assert_eq!(backend.request_timeout, None);
    }
}
