//! Configuration for the purchase binary.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("Invalid value for {var}: {value:?} ({expected})")]
    InvalidValue {
        /// Variable name
        var: &'static str,
        /// Value found
        value: String,
        /// What would have been accepted
        expected: &'static str,
    },
}

/// Purchase binary configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default tracing filter when `RUST_LOG` is unset (trace, debug, info, warn, error)
    pub log_level: String,
    /// JSON request file; stdin when `None`
    pub request_file: Option<PathBuf>,
    /// Print a Prometheus snapshot after the purchase
    pub render_metrics: bool,
    /// Delay each collaborator call by this much
    pub simulated_latency: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            request_file: None,
            render_metrics: false,
            simulated_latency: Duration::ZERO,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = match lookup("PURCHASE_LOG_LEVEL") {
            Some(level) => parse_level(&level)?,
            None => defaults.log_level,
        };

        let request_file = lookup("PURCHASE_REQUEST_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let render_metrics = match lookup("PURCHASE_RENDER_METRICS") {
            Some(value) => parse_bool("PURCHASE_RENDER_METRICS", &value)?,
            None => defaults.render_metrics,
        };

        let simulated_latency = match lookup("PURCHASE_SIMULATED_LATENCY_MS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidValue {
                    var: "PURCHASE_SIMULATED_LATENCY_MS",
                    value,
                    expected: "milliseconds as a non-negative integer",
                })?,
            None => defaults.simulated_latency,
        };

        Ok(Self {
            log_level,
            request_file,
            render_metrics,
            simulated_latency,
        })
    }

    /// Use `path` as the request file when given (CLI argument wins over env).
    #[must_use]
    pub fn with_request_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.request_file = path;
        }
        self
    }
}

fn parse_level(value: &str) -> Result<String, ConfigError> {
    let level = value.trim().to_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(level),
        _ => Err(ConfigError::InvalidValue {
            var: "PURCHASE_LOG_LEVEL",
            value: value.to_string(),
            expected: "one of trace, debug, info, warn, error",
        }),
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: value.to_string(),
            expected: "true or false",
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]).unwrap(), Config::default());
    }

    #[test]
    fn test_all_variables() {
        let config = config_from(&[
            ("PURCHASE_LOG_LEVEL", "DEBUG"),
            ("PURCHASE_REQUEST_FILE", "request.json"),
            ("PURCHASE_RENDER_METRICS", "yes"),
            ("PURCHASE_SIMULATED_LATENCY_MS", "25"),
        ])
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.request_file, Some(PathBuf::from("request.json")));
        assert!(config.render_metrics);
        assert_eq!(config.simulated_latency, Duration::from_millis(25));
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let err = config_from(&[("PURCHASE_RENDER_METRICS", "maybe")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                var: "PURCHASE_RENDER_METRICS",
                ..
            }
        ));

        let err = config_from(&[("PURCHASE_LOG_LEVEL", "loud")]).unwrap_err();
        assert!(err.to_string().contains("PURCHASE_LOG_LEVEL"));

        assert!(config_from(&[("PURCHASE_SIMULATED_LATENCY_MS", "-3")]).is_err());
    }

    #[test]
    fn test_cli_path_overrides_env() {
        let config = config_from(&[("PURCHASE_REQUEST_FILE", "env.json")]).unwrap();

        let kept = config.clone().with_request_file(None);
        assert_eq!(kept.request_file, Some(PathBuf::from("env.json")));

        let overridden = config.with_request_file(Some(PathBuf::from("cli.json")));
        assert_eq!(overridden.request_file, Some(PathBuf::from("cli.json")));
    }
}
