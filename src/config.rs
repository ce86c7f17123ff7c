//! Domain configuration.
//!
//! Tuning knobs for the domain services, typically loaded from a TOML
//! fragment of the application configuration. Everything has a sensible
//! default; both timeouts are disabled unless set.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_EVENT_CAPACITY: usize = 32;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse domain configuration: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DomainConfig {
    /// Capacity of each service's broadcast event channel.
    pub event_capacity: usize,
    /// Upper bound on a single prompt interpretation call, in milliseconds.
    pub interpreter_timeout_ms: Option<u64>,
    /// Upper bound on a single automation run, in milliseconds.
    pub automation_timeout_ms: Option<u64>,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            event_capacity: DEFAULT_EVENT_CAPACITY,
            interpreter_timeout_ms: None,
            automation_timeout_ms: None,
        }
    }
}

impl DomainConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn interpreter_timeout(&self) -> Option<Duration> {
        self.interpreter_timeout_ms.map(Duration::from_millis)
    }

    pub fn automation_timeout(&self) -> Option<Duration> {
        self.automation_timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = DomainConfig::from_toml_str("").unwrap();
        assert_eq!(config, DomainConfig::default());
        assert_eq!(config.event_capacity, DEFAULT_EVENT_CAPACITY);
        assert_eq!(config.interpreter_timeout(), None);
    }

    #[test]
    fn overrides_are_applied() {
        let config = DomainConfig::from_toml_str(
            r#"
            event_capacity = 64
            interpreter_timeout_ms = 5000
            automation_timeout_ms = 30000
            "#,
        )
        .unwrap();
        assert_eq!(config.event_capacity, 64);
        assert_eq!(config.interpreter_timeout(), Some(Duration::from_millis(5000)));
        assert_eq!(config.automation_timeout(), Some(Duration::from_millis(30000)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = DomainConfig::from_toml_str("event_capasity = 64");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
