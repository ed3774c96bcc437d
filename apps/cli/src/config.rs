use std::path::PathBuf;
use std::time::Duration;

use goalsaver_core::{Error, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_SECRETS_PATH: &str = "./data/secrets.json";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub secrets_path: PathBuf,
    pub secret_key: Option<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset and blank values fall
    /// back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = var("GOALSAVER_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into());
        let secrets_path: PathBuf = var("GOALSAVER_SECRETS_PATH")
            .unwrap_or_else(|| DEFAULT_SECRETS_PATH.into())
            .into();
        let secret_key = var("GOALSAVER_SECRET_KEY");
        let timeout_ms = match var("GOALSAVER_REQUEST_TIMEOUT_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                Error::InvalidConfigValue(format!(
                    "GOALSAVER_REQUEST_TIMEOUT_MS must be a number of milliseconds, got {raw:?}"
                ))
            })?,
            None => DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            api_url,
            secrets_path,
            secret_key,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.secrets_path, PathBuf::from("./data/secrets.json"));
        assert_eq!(config.secret_key, None);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn overrides() {
        let config = Config::from_lookup(lookup(&[
            ("GOALSAVER_API_URL", "https://api.example.com"),
            ("GOALSAVER_SECRETS_PATH", "/tmp/s.json"),
            ("GOALSAVER_SECRET_KEY", "abc"),
            ("GOALSAVER_REQUEST_TIMEOUT_MS", "1500"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.secrets_path, PathBuf::from("/tmp/s.json"));
        assert_eq!(config.secret_key.as_deref(), Some("abc"));
        assert_eq!(config.request_timeout, Duration::from_millis(1500));
    }

    #[test]
    fn blank_values_use_defaults() {
        let config = Config::from_lookup(lookup(&[("GOALSAVER_SECRET_KEY", "  ")])).unwrap();
        assert_eq!(config.secret_key, None);
    }

    #[test]
    fn invalid_timeout() {
        let result = Config::from_lookup(lookup(&[("GOALSAVER_REQUEST_TIMEOUT_MS", "soon")]));
        assert!(matches!(result, Err(Error::InvalidConfigValue(_))));
    }
}
