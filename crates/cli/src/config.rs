//! Runtime configuration from environment variables.

use std::path::PathBuf;

use medbook_model::DEFAULT_HISTORY_LIMIT;

pub const DEFAULT_DATA_FILE: &str = "data/medbook.json";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `MEDBOOK_DATA_FILE`
    pub data_file: PathBuf,
    /// `MEDBOOK_HISTORY_LIMIT`, at least 1.
    pub history_limit: usize,
    /// `MEDBOOK_LOG`; `RUST_LOG` takes precedence when set.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            history_limit: DEFAULT_HISTORY_LIMIT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    /// The log filter alone, so logging can start before the rest is read.
    pub fn log_filter_from_env() -> String {
        log_filter(env_lookup)
    }

    /// Builds the config from any key lookup. Invalid values fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let data_file = lookup("MEDBOOK_DATA_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_file);

        let history_limit = match lookup("MEDBOOK_HISTORY_LIMIT") {
            None => defaults.history_limit,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(limit) if limit >= 1 => limit,
                _ => {
                    tracing::warn!(
                        value = %raw,
                        default = defaults.history_limit,
                        "MEDBOOK_HISTORY_LIMIT is not a positive integer; using default"
                    );
                    defaults.history_limit
                }
            },
        };

        Self {
            data_file,
            history_limit,
            log_filter: log_filter(lookup),
        }
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn log_filter(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup("MEDBOOK_LOG")
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), AppConfig::default());
    }

    #[test]
    fn values_are_read() {
        let cfg = config(&[
            ("MEDBOOK_DATA_FILE", "/tmp/clinic.json"),
            ("MEDBOOK_HISTORY_LIMIT", "5"),
            ("MEDBOOK_LOG", "debug"),
        ]);
        assert_eq!(cfg.data_file, PathBuf::from("/tmp/clinic.json"));
        assert_eq!(cfg.history_limit, 5);
        assert_eq!(cfg.log_filter, "debug");
    }

    #[test]
    fn invalid_history_limit_falls_back() {
        for bad in ["0", "-3", "lots"] {
            let cfg = config(&[("MEDBOOK_HISTORY_LIMIT", bad)]);
            assert_eq!(cfg.history_limit, DEFAULT_HISTORY_LIMIT, "value {bad:?}");
        }
    }
}
