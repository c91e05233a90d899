use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::links::DEFAULT_ARCHIVE_BASE_URL;
use crate::modules::integrations::archive::DEFAULT_TIMEOUT;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub archive_base_url: String,
    pub upstream_timeout_secs: u64,
    pub cors_allowed_origins: Vec<String>,
    /// Directory with a prebuilt front-end, served for non-API paths
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unparsable numbers fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(8000),
            archive_base_url: lookup("ARCHIVE_BASE_URL")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ARCHIVE_BASE_URL.to_string()),
            upstream_timeout_secs: lookup("UPSTREAM_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_TIMEOUT.as_secs()),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(Vec::new),
            static_dir: lookup("STATIC_DIR")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.archive_base_url, "https://archive.org");
        assert_eq!(config.upstream_timeout(), Duration::from_secs(10));
        assert!(config.cors_allowed_origins.is_empty());
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_overrides_and_bad_numbers() {
        let config = config_from(&[
            ("PORT", "not-a-port"),
            ("UPSTREAM_TIMEOUT_SECS", "3"),
            ("ARCHIVE_BASE_URL", "http://localhost:9999"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, ,http://b.test"),
            ("STATIC_DIR", "public"),
        ]);
        assert_eq!(config.port, 8000);
        assert_eq!(config.upstream_timeout_secs, 3);
        assert_eq!(config.archive_base_url, "http://localhost:9999");
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert_eq!(config.static_dir, Some(PathBuf::from("public")));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let config = config_from(&[("UPSTREAM_TIMEOUT_SECS", "0")]);
        assert_eq!(config.upstream_timeout_secs, 10);
    }
}
