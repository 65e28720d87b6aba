use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;

use crate::fetcher::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

const ENV_PREFIX: &str = "SCRAPER";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub timeout_secs: u64,
    pub base_url: String,
    pub user_agent: String,
    /// Shown as `analyzed_by` in the success envelope.
    pub analyzed_by: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: "0.0.0.0".into(),
            port: 3000,
            timeout_secs: 15,
            base_url: DEFAULT_BASE_URL.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            analyzed_by: "TikTok Profile Analyzer".into(),
        }
    }
}

impl Settings {
    /// Defaults, then a bare `PORT`, then `SCRAPER_*` variables.
    pub fn load() -> Result<Self> {
        Self::layered(
            std::env::var("PORT").ok().as_deref(),
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    fn layered(port_var: Option<&str>, env: Environment) -> Result<Self> {
        let defaults = Settings::default();
        let port = port_var
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(port))?
            .set_default("timeout_secs", defaults.timeout_secs as i64)?
            .set_default("base_url", defaults.base_url)?
            .set_default("user_agent", defaults.user_agent)?
            .set_default("analyzed_by", defaults.analyzed_by)?
            .add_source(env)
            .build()
            .context("Failed to build settings")?
            .try_deserialize()
            .context("Invalid settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Map;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn defaults_without_overrides() {
        let s = Settings::layered(None, env(&[])).unwrap();
        let d = Settings::default();
        assert_eq!(s.port, d.port);
        assert_eq!(s.timeout_secs, d.timeout_secs);
        assert_eq!(s.base_url, d.base_url);
        assert_eq!(s.user_agent, d.user_agent);
        assert_eq!(s.analyzed_by, d.analyzed_by);
    }

    #[test]
    fn bare_port_over_default() {
        let s = Settings::layered(Some("4000"), env(&[])).unwrap();
        assert_eq!(s.port, 4000);
    }

    #[test]
    fn unparsable_bare_port_is_ignored() {
        let s = Settings::layered(Some("http"), env(&[])).unwrap();
        assert_eq!(s.port, 3000);
    }

    #[test]
    fn prefixed_vars_win() {
        let s = Settings::layered(
            Some("4000"),
            env(&[
                ("SCRAPER_PORT", "5000"),
                ("SCRAPER_TIMEOUT_SECS", "3"),
                ("SCRAPER_BASE_URL", "http://x.test"),
                ("SCRAPER_ANALYZED_BY", "Test Analyzer"),
            ]),
        )
        .unwrap();
        assert_eq!(s.port, 5000);
        assert_eq!(s.timeout_secs, 3);
        assert_eq!(s.base_url, "http://x.test");
        assert_eq!(s.analyzed_by, "Test Analyzer");
    }
}
