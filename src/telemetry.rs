//! Process-wide telemetry setup.
//!
//! [`init_telemetry`] is called once from `main` before anything logs. It installs
//! the `tracing` subscriber and decides, from an explicit flag only, whether the
//! page carries the browser analytics snippet.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, LogFormat};

/// Telemetry settings extracted from [`Config`].
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub log_format: LogFormat,
    pub analytics_enabled: bool,
    pub analytics_key: Option<String>,
    pub analytics_host: String,
}

impl From<&Config> for TelemetryConfig {
    fn from(config: &Config) -> Self {
        Self {
            log_level: config.log_level.clone(),
            log_format: config.log_format,
            analytics_enabled: config.analytics_enabled,
            analytics_key: config.analytics_key.clone(),
            analytics_host: config.analytics_host.clone(),
        }
    }
}

/// Browser analytics settings rendered into the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsConfig {
    pub key: String,
    pub host: String,
}

/// Handle returned by [`init_telemetry`].
#[derive(Debug, Clone, Default)]
pub struct Telemetry {
    /// `Some` only when analytics was explicitly enabled.
    pub analytics: Option<AnalyticsConfig>,
}

/// Installs the global `tracing` subscriber and resolves analytics settings.
///
/// # Errors
///
/// Returns an error if the log filter is invalid or a subscriber is already
/// installed.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<Telemetry> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid log filter '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    Ok(Telemetry {
        analytics: analytics_from(config),
    })
}

/// Resolves analytics settings; disabled unless the flag is set and a key exists.
pub fn analytics_from(config: &TelemetryConfig) -> Option<AnalyticsConfig> {
    if !config.analytics_enabled {
        return None;
    }

    config.analytics_key.as_ref().map(|key| AnalyticsConfig {
        key: key.clone(),
        host: config.analytics_host.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn telemetry_config(enabled: bool, key: Option<&str>) -> TelemetryConfig {
        TelemetryConfig {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            analytics_enabled: enabled,
            analytics_key: key.map(str::to_string),
            analytics_host: "https://app.posthog.com".to_string(),
        }
    }

    #[test]
    fn test_analytics_disabled_by_flag() {
        assert_eq!(analytics_from(&telemetry_config(false, Some("phc_key"))), None);
    }

    #[test]
    fn test_analytics_enabled_with_key() {
        assert_eq!(
            analytics_from(&telemetry_config(true, Some("phc_key"))),
            Some(AnalyticsConfig {
                key: "phc_key".to_string(),
                host: "https://app.posthog.com".to_string(),
            })
        );
    }

    #[test]
    fn test_analytics_enabled_without_key_stays_off() {
        assert_eq!(analytics_from(&telemetry_config(true, None)), None);
    }

    #[test]
    fn test_invalid_log_filter_rejected() {
        let mut config = telemetry_config(false, None);
        config.log_level = "app_directory=verbose".to_string();
        assert!(init_telemetry(&config).is_err());
    }
}
