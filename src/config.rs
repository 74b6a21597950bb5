use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use reqwest::Url;

use crate::pages::{DEFAULT_IDLE_TIMEOUT, DEFAULT_MAX_PAGES};

const DEFAULT_API_URL: &str = "https://fsa-puppy-bowl.herokuapp.com/api";
const DEFAULT_COHORT: &str = "2310-FSA-ET-WEB-PT-SF";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: Url,
    pub cohort_name: String,
    pub server_host: IpAddr,
    pub server_port: u16,
    pub environment: Environment,
    pub log_level: String,
    pub max_open_pages: usize,
    pub page_idle_timeout: Duration,
}

/// Deployment environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Lower-case name, as accepted in `ENVIRONMENT`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional with defaults: `PUPPY_BOWL_API_URL`, `PUPPY_BOWL_COHORT`, `SERVER_HOST`,
    /// `SERVER_PORT`, `ENVIRONMENT`, `LOG_LEVEL`, `MAX_OPEN_PAGES`, `PAGE_IDLE_TIMEOUT_SECS`
    ///
    /// `PORT` overrides `SERVER_PORT` and host defaults to `0.0.0.0` in production.
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL, `SERVER_HOST`, `SERVER_PORT` or the page limits contain
    /// invalid values, or if the cohort name is blank.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_base_url = var("PUPPY_BOWL_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .parse::<Url>()
            .map_err(|e| anyhow::anyhow!("PUPPY_BOWL_API_URL must be a valid URL: {e}"))?;

        let cohort_name = var("PUPPY_BOWL_COHORT")
            .unwrap_or_else(|| DEFAULT_COHORT.to_string())
            .trim()
            .to_string();
        if cohort_name.is_empty() || cohort_name.contains('/') {
            return Err(anyhow::anyhow!(
                "PUPPY_BOWL_COHORT must be a non-empty path segment"
            ));
        }

        let environment = match var("ENVIRONMENT")
            .unwrap_or_else(|| "development".to_string())
            .as_str()
        {
            "production" => Environment::Production,
            "staging" => Environment::Staging,
            _ => Environment::Development,
        };

        let server_port = var("PORT")
            .or_else(|| var("SERVER_PORT"))
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("SERVER_PORT / PORT must be a valid u16"))?;

        let default_host = if environment == Environment::Production {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        };

        let server_host = var("SERVER_HOST")
            .unwrap_or_else(|| default_host.to_string())
            .parse::<IpAddr>()
            .map_err(|_| anyhow::anyhow!("SERVER_HOST must be a valid IP address"))?;

        let log_level = var("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let max_open_pages = var("MAX_OPEN_PAGES")
            .unwrap_or_else(|| DEFAULT_MAX_PAGES.to_string())
            .parse::<usize>()
            .ok()
            .filter(|max| *max > 0)
            .ok_or_else(|| anyhow::anyhow!("MAX_OPEN_PAGES must be a positive integer"))?;

        let page_idle_timeout = var("PAGE_IDLE_TIMEOUT_SECS")
            .map_or(Ok(DEFAULT_IDLE_TIMEOUT), |secs| {
                secs.parse::<u64>().map(Duration::from_secs)
            })
            .map_err(|_| anyhow::anyhow!("PAGE_IDLE_TIMEOUT_SECS must be a number of seconds"))?;

        Ok(Self {
            api_base_url,
            cohort_name,
            server_host,
            server_port,
            environment,
            log_level,
            max_open_pages,
            page_idle_timeout,
        })
    }

    /// Base URL of the cohort's roster, always ending in `/`.
    #[must_use]
    pub fn roster_url(&self) -> String {
        format!(
            "{}/{}/",
            self.api_base_url.as_str().trim_end_matches('/'),
            self.cohort_name
        )
    }

    /// Build the socket address for the server to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() -> anyhow::Result<()> {
        let config = config_from(&[])?;
        assert_eq!(config.cohort_name, DEFAULT_COHORT);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.socket_addr().port(), 3000);
        assert_eq!(config.max_open_pages, DEFAULT_MAX_PAGES);
        assert_eq!(config.page_idle_timeout, DEFAULT_IDLE_TIMEOUT);
        assert_eq!(
            config.roster_url(),
            "https://fsa-puppy-bowl.herokuapp.com/api/2310-FSA-ET-WEB-PT-SF/"
        );
        Ok(())
    }

    #[test]
    fn test_roster_url_normalizes_trailing_slash() -> anyhow::Result<()> {
        let config = config_from(&[
            ("PUPPY_BOWL_API_URL", "http://127.0.0.1:9000/api/"),
            ("PUPPY_BOWL_COHORT", "test-cohort"),
        ])?;
        assert_eq!(config.roster_url(), "http://127.0.0.1:9000/api/test-cohort/");
        Ok(())
    }

    #[test]
    fn test_port_overrides_server_port() -> anyhow::Result<()> {
        let config = config_from(&[("PORT", "8080"), ("SERVER_PORT", "9090")])?;
        assert_eq!(config.server_port, 8080);
        Ok(())
    }

    #[test]
    fn test_production_binds_all_interfaces() -> anyhow::Result<()> {
        let config = config_from(&[("ENVIRONMENT", "production")])?;
        assert_eq!(config.server_host, IpAddr::from([0, 0, 0, 0]));
        Ok(())
    }

    #[test]
    fn test_page_limits() -> anyhow::Result<()> {
        let config = config_from(&[("MAX_OPEN_PAGES", "8"), ("PAGE_IDLE_TIMEOUT_SECS", "90")])?;
        assert_eq!(config.max_open_pages, 8);
        assert_eq!(config.page_idle_timeout, Duration::from_secs(90));
        Ok(())
    }

    #[test]
    fn test_environment_name_round_trips() -> anyhow::Result<()> {
        for name in ["development", "staging", "production"] {
            let config = config_from(&[("ENVIRONMENT", name)])?;
            assert_eq!(config.environment.as_str(), name);
        }
        Ok(())
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("SERVER_PORT", "not-a-port")]).is_err());
        assert!(config_from(&[("SERVER_HOST", "localhost")]).is_err());
        assert!(config_from(&[("PUPPY_BOWL_API_URL", "not a url")]).is_err());
        assert!(config_from(&[("PUPPY_BOWL_COHORT", "  ")]).is_err());
        assert!(config_from(&[("PUPPY_BOWL_COHORT", "a/b")]).is_err());
        assert!(config_from(&[("MAX_OPEN_PAGES", "0")]).is_err());
        assert!(config_from(&[("PAGE_IDLE_TIMEOUT_SECS", "soon")]).is_err());
    }
}
