//! Server settings, read once from the environment at start-up.
//!
//! | Variable              | Default     |
//! |-----------------------|-------------|
//! | `AGENCY_HOST`         | `127.0.0.1` |
//! | `AGENCY_PORT`         | `8080`      |
//! | `AGENCY_OPEN_BROWSER` | off         |
//!
//! Unparseable values fall back to the default and log a warning.

use log::warn;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open the site in the default browser shortly after start-up.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            open_browser: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = lookup("AGENCY_HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("AGENCY_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Invalid AGENCY_PORT `{}`, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let open_browser = match lookup("AGENCY_OPEN_BROWSER").as_deref().map(str::trim) {
            None | Some("") => defaults.open_browser,
            Some(v) if ["1", "true", "yes", "on"].iter().any(|t| v.eq_ignore_ascii_case(t)) => true,
            Some(v) if ["0", "false", "no", "off"].iter().any(|t| v.eq_ignore_ascii_case(t)) => false,
            Some(v) => {
                warn!("Invalid AGENCY_OPEN_BROWSER `{}`, leaving it off", v);
                defaults.open_browser
            }
        };

        Self {
            host,
            port,
            open_browser,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), ServerConfig::default());
        assert_eq!(ServerConfig::default().url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_overrides() {
        let c = config(&[
            ("AGENCY_HOST", "0.0.0.0"),
            ("AGENCY_PORT", "3000"),
            ("AGENCY_OPEN_BROWSER", "TRUE"),
        ]);
        assert_eq!(c.host, "0.0.0.0");
        assert_eq!(c.port, 3000);
        assert!(c.open_browser);
    }

    #[test]
    fn invalid_values_fall_back() {
        let c = config(&[
            ("AGENCY_HOST", "  "),
            ("AGENCY_PORT", "eighty"),
            ("AGENCY_OPEN_BROWSER", "sometimes"),
        ]);
        assert_eq!(c, ServerConfig::default());
    }
}
