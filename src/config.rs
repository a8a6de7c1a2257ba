//! Runtime configuration read from the environment

use std::time::Duration;

use crate::api::DEFAULT_SUBMIT_DELAY;
use crate::error::ConfigError;
use crate::schema::FormVariant;

pub const VARIANT_VAR: &str = "VISITOR_FORM_VARIANT";
pub const SUBMIT_DELAY_VAR: &str = "VISITOR_SUBMIT_DELAY_MS";
pub const TOAST_VAR: &str = "VISITOR_TOAST_MS";

const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(4000);

/// App configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub variant: FormVariant,
    /// Simulated round trip to the security desk
    pub submit_delay: Duration,
    pub toast_duration: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            variant: FormVariant::default(),
            submit_delay: DEFAULT_SUBMIT_DELAY,
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(variant) = lookup(VARIANT_VAR) {
            config.variant = variant.parse()?;
        }
        if let Some(delay) = lookup(SUBMIT_DELAY_VAR) {
            config.submit_delay = parse_millis(SUBMIT_DELAY_VAR, delay)?;
        }
        if let Some(toast) = lookup(TOAST_VAR) {
            config.toast_duration = parse_millis(TOAST_VAR, toast)?;
        }

        Ok(config)
    }
}

fn parse_millis(key: &'static str, value: String) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(ms) => Ok(Duration::from_millis(ms)),
        Err(source) => Err(ConfigError::InvalidDuration { key, value, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.submit_delay, Duration::from_millis(1500));
        assert_eq!(config.variant, FormVariant::Standard);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (VARIANT_VAR, "material"),
            (SUBMIT_DELAY_VAR, " 250 "),
            (TOAST_VAR, "1000"),
        ]))
        .unwrap();
        assert_eq!(config.variant, FormVariant::Material);
        assert_eq!(config.submit_delay, Duration::from_millis(250));
        assert_eq!(config.toast_duration, Duration::from_secs(1));
    }

    #[test]
    fn test_rejects_bad_delay() {
        let err = AppConfig::from_lookup(lookup(&[(SUBMIT_DELAY_VAR, "1.5s")])).unwrap_err();
        match err {
            ConfigError::InvalidDuration { key, value, .. } => {
                assert_eq!(key, SUBMIT_DELAY_VAR);
                assert_eq!(value, "1.5s");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_unknown_variant() {
        let err = AppConfig::from_lookup(lookup(&[(VARIANT_VAR, "compact")])).unwrap_err();
        assert!(err.to_string().contains("compact"));
    }
}
