use std::net::SocketAddr;
use std::time::Duration;

use crate::store::DEFAULT_WINDOW_SIZE;

pub const DEFAULT_UPSTREAM_URL: &str = "http://20.244.56.144/test";
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 500;
pub const MAX_WINDOW_SIZE: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub rest_addr: SocketAddr,
    pub window_size: usize,
    pub upstream_url: String,
    pub upstream_timeout: Duration,
    pub log_json: bool,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{key}: cannot parse {value:?}")]
    Parse { key: &'static str, value: String },
    #[error("validation: {0}")]
    Validation(String),
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            rest_addr: SocketAddr::from(([0, 0, 0, 0], 9877)),
            window_size: DEFAULT_WINDOW_SIZE,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            upstream_timeout: Duration::from_millis(DEFAULT_UPSTREAM_TIMEOUT_MS),
            log_json: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, falling back to defaults
    /// for absent keys. `NUMWIN_ADDR` wins over `PORT` when both are set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(addr) = lookup("NUMWIN_ADDR") {
            cfg.rest_addr = parse("NUMWIN_ADDR", &addr)?;
        } else if let Some(port) = lookup("PORT") {
            let port: u16 = parse("PORT", &port)?;
            cfg.rest_addr = SocketAddr::from(([0, 0, 0, 0], port));
        }

        if let Some(size) = lookup("NUMWIN_WINDOW_SIZE") {
            cfg.window_size = parse("NUMWIN_WINDOW_SIZE", &size)?;
        }
        if let Some(url) = lookup("NUMWIN_UPSTREAM_URL") {
            cfg.upstream_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(ms) = lookup("NUMWIN_UPSTREAM_TIMEOUT_MS") {
            let ms: u64 = parse("NUMWIN_UPSTREAM_TIMEOUT_MS", &ms)?;
            cfg.upstream_timeout = Duration::from_millis(ms);
        }
        if let Some(flag) = lookup("NUMWIN_LOG_JSON") {
            cfg.log_json = matches!(flag.trim(), "1" | "true" | "yes");
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size == 0 {
            return Err(ConfigError::Validation("window_size must be > 0".into()));
        }
        if self.window_size > MAX_WINDOW_SIZE {
            return Err(ConfigError::Validation(format!(
                "window_size must be <= {MAX_WINDOW_SIZE}"
            )));
        }
        if self.upstream_url.is_empty() {
            return Err(ConfigError::Validation(
                "upstream_url must not be empty".into(),
            ));
        }
        if !self.upstream_url.starts_with("http://") && !self.upstream_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(
                "upstream_url must start with http:// or https://".into(),
            ));
        }
        if self.upstream_timeout.is_zero() {
            return Err(ConfigError::Validation(
                "upstream_timeout must be > 0".into(),
            ));
        }
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Parse {
        key,
        value: value.to_string(),
    })
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
    fn defaults_when_unset() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg, ServerConfig::default());
        assert_eq!(cfg.window_size, 10);
        assert_eq!(cfg.upstream_timeout, Duration::from_millis(500));
        assert_eq!(cfg.rest_addr.port(), 9877);
    }

    #[test]
    fn port_sets_bind_address() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "8081")])).unwrap();
        assert_eq!(cfg.rest_addr, "0.0.0.0:8081".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn explicit_addr_wins_over_port() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "8081"),
            ("NUMWIN_ADDR", "127.0.0.1:7000"),
        ]))
        .unwrap();
        assert_eq!(cfg.rest_addr, "127.0.0.1:7000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[
            ("NUMWIN_WINDOW_SIZE", "3"),
            ("NUMWIN_UPSTREAM_URL", "http://localhost:9000/test/"),
            ("NUMWIN_UPSTREAM_TIMEOUT_MS", "1500"),
            ("NUMWIN_LOG_JSON", "true"),
        ]))
        .unwrap();
        assert_eq!(cfg.window_size, 3);
        assert_eq!(cfg.upstream_url, "http://localhost:9000/test");
        assert_eq!(cfg.upstream_timeout, Duration::from_millis(1500));
        assert!(cfg.log_json);
    }

    #[test]
    fn zero_window_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("NUMWIN_WINDOW_SIZE", "0")]))
            .unwrap_err();
        assert!(err.to_string().contains("window_size"));
    }

    #[test]
    fn oversized_window_rejected() {
        let huge = usize::MAX.to_string();
        let err = ServerConfig::from_lookup(lookup_from(&[("NUMWIN_WINDOW_SIZE", huge.as_str())]))
            .unwrap_err();
        assert!(err.to_string().contains("window_size must be <="));

        let max = MAX_WINDOW_SIZE.to_string();
        let cfg = ServerConfig::from_lookup(lookup_from(&[("NUMWIN_WINDOW_SIZE", max.as_str())])).unwrap();
        assert_eq!(cfg.window_size, MAX_WINDOW_SIZE);
    }

    #[test]
    fn bad_number_rejected() {
        let err =
            ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Parse {
                key: "PORT",
                value: "eighty".into()
            }
        );
    }

    #[test]
    fn non_http_upstream_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[(
            "NUMWIN_UPSTREAM_URL",
            "ftp://example.com",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("http://"));
    }

    #[test]
    fn zero_timeout_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[(
            "NUMWIN_UPSTREAM_TIMEOUT_MS",
            "0",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }
}
