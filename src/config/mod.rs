//! Configuration management for the authnz client

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

const DEFAULT_ROOT_URL: &str = "http://localhost:8080/";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Application root that endpoint paths are appended to (e.g. https://usegalaxy.org/)
    pub root_url: String,
    /// Optional request timeout for the HTTP transport.
    /// When unset the transport's own default applies.
    pub http_timeout: Option<Duration>,
    /// Log output format: "json" or "text"
    pub log_format: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            root_url: DEFAULT_ROOT_URL.to_string(),
            http_timeout: None,
            log_format: "text".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let root_url = lookup("AUTHNZ_ROOT_URL").unwrap_or_else(|| DEFAULT_ROOT_URL.to_string());
        Url::parse(&root_url).with_context(|| format!("Invalid AUTHNZ_ROOT_URL: {}", root_url))?;

        let http_timeout = match lookup("AUTHNZ_HTTP_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(
                raw.trim()
                    .parse()
                    .context("Invalid AUTHNZ_HTTP_TIMEOUT_SECS")?,
            )),
            None => None,
        };

        let log_format = lookup("AUTHNZ_LOG_FORMAT").unwrap_or_else(|| "text".to_string());

        Ok(Self {
            root_url,
            http_timeout,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.root_url, "http://localhost:8080/");
        assert!(config.http_timeout.is_none());
        assert_eq!(config.log_format, "text");
    }

    #[test]
    fn test_custom_values() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("AUTHNZ_ROOT_URL", "https://galaxy.example.org/tenant-a/"),
            ("AUTHNZ_HTTP_TIMEOUT_SECS", "15"),
            ("AUTHNZ_LOG_FORMAT", "json"),
        ]))
        .unwrap();
        assert_eq!(config.log_format, "json");
        assert_eq!(config.root_url, "https://galaxy.example.org/tenant-a/");
        assert_eq!(config.http_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_invalid_root_url() {
        let result = ClientConfig::from_lookup(lookup_from(&[("AUTHNZ_ROOT_URL", "not a url")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_timeout() {
        let result =
            ClientConfig::from_lookup(lookup_from(&[("AUTHNZ_HTTP_TIMEOUT_SECS", "soon")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_default_matches_empty_env() {
        let config = ClientConfig::default();
        assert_eq!(config.root_url, DEFAULT_ROOT_URL);
        assert!(config.http_timeout.is_none());
    }
}
