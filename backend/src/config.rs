//! Host settings, read from the process environment (and a `.env` file, if
//! present) once at startup.
//!
//! | variable                  | default     |
//! |---------------------------|-------------|
//! | `CAR_MARKET_HOST`         | `127.0.0.1` |
//! | `CAR_MARKET_PORT`         | `8080`      |
//! | `CAR_MARKET_UPSTREAM`     | unset       |
//! | `CAR_MARKET_OPEN_BROWSER` | `true`      |
//! | `CAR_MARKET_BODY_LIMIT`   | 10 MiB      |
//!
//! Values that do not parse fall back to their default with a warning.

use std::str::FromStr;

use log::warn;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BODY_LIMIT: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the car-market API that `/api/*` is forwarded to. Without
    /// one the proxy answers 503.
    pub upstream: Option<String>,
    pub open_browser: bool,
    /// Largest request body accepted for forwarding, in bytes.
    pub body_limit: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            upstream: None,
            open_browser: true,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            host: value("CAR_MARKET_HOST").unwrap_or(defaults.host),
            port: parse_or(value("CAR_MARKET_PORT"), "CAR_MARKET_PORT", defaults.port),
            upstream: value("CAR_MARKET_UPSTREAM").map(|url| url.trim_end_matches('/').to_string()),
            open_browser: value("CAR_MARKET_OPEN_BROWSER")
                .map(|raw| parse_flag(&raw, defaults.open_browser))
                .unwrap_or(defaults.open_browser),
            body_limit: parse_or(
                value("CAR_MARKET_BODY_LIMIT"),
                "CAR_MARKET_BODY_LIMIT",
                defaults.body_limit,
            ),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr + Copy>(raw: Option<String>, key: &str, default: T) -> T {
    match raw {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("ignoring {}={:?}: not a valid value", key, raw);
            default
        }),
    }
}

fn parse_flag(raw: &str, default: bool) -> bool {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            warn!("ignoring CAR_MARKET_OPEN_BROWSER={:?}: expected true or false", raw);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> HostConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config(&[]), HostConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let cfg = config(&[
            ("CAR_MARKET_HOST", "0.0.0.0"),
            ("CAR_MARKET_PORT", "9000"),
            ("CAR_MARKET_UPSTREAM", "https://cars.example.com/api/"),
            ("CAR_MARKET_OPEN_BROWSER", "false"),
            ("CAR_MARKET_BODY_LIMIT", "1048576"),
        ]);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.upstream.as_deref(), Some("https://cars.example.com/api"));
        assert!(!cfg.open_browser);
        assert_eq!(cfg.body_limit, 1_048_576);
        assert_eq!(cfg.url(), "http://0.0.0.0:9000");
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = config(&[
            ("CAR_MARKET_PORT", "eighty"),
            ("CAR_MARKET_OPEN_BROWSER", "maybe"),
            ("CAR_MARKET_BODY_LIMIT", "-1"),
            ("CAR_MARKET_UPSTREAM", "   "),
        ]);
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert!(cfg.open_browser);
        assert_eq!(cfg.body_limit, DEFAULT_BODY_LIMIT);
        assert_eq!(cfg.upstream, None);
    }
}
