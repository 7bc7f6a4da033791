//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! ```bash
//! export NOTION_TOKEN="secret_..."
//! export NOTION_DATABASE_ID="<listing database id>"
//! export NOTION_DATABASE_ID_REQUESTS="<submission database id>"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `NOTION_VERSION` - Store API version header (default: `2022-06-28`)
//! - `NOTION_API_BASE` - Store base URL (default: `https://api.notion.com/v1`)
//! - `NOTION_TIMEOUT_SECS` - Store request timeout (default: transport default)
//! - `SUBMISSION_VALIDATION` - `strict` or `passthrough` (default: `strict`)
//! - `SUBMISSION_DEDUP_WINDOW_SECS` - Duplicate submission window, 0 disables (default: 600)
//! - `ANALYTICS_ENABLED` - Render the analytics snippet (default: `false`)
//! - `POSTHOG_KEY` - Analytics project key, required when analytics is enabled
//! - `POSTHOG_HOST` - Analytics host (default: `https://app.posthog.com`)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.notion.com/v1";
pub const DEFAULT_API_VERSION: &str = "2022-06-28";
pub const DEFAULT_ANALYTICS_HOST: &str = "https://app.posthog.com";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: LogFormat,
    pub store: StoreConfig,
    pub validation_mode: ValidationMode,
    /// Window (seconds) during which a repeated idempotency key is answered
    /// without a second store call. `0` disables de-duplication.
    pub dedup_window_seconds: u64,
    pub analytics_enabled: bool,
    pub analytics_key: Option<String>,
    pub analytics_host: String,
}

/// Connection settings for the external record store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub api_base: String,
    pub api_version: String,
    pub token: String,
    /// Collection queried for the listing page.
    pub listings_database_id: String,
    /// Collection receiving visitor submissions.
    pub submissions_database_id: String,
    pub timeout_seconds: Option<u64>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("LOG_FORMAT must be 'text' or 'json', got '{other}'"),
        }
    }
}

/// How the relay treats submissions with blank required fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Reject with a validation error before contacting the store.
    Strict,
    /// Forward every submission upstream unchanged.
    Passthrough,
}

impl FromStr for ValidationMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "strict" => Ok(Self::Strict),
            "passthrough" => Ok(Self::Passthrough),
            other => anyhow::bail!(
                "SUBMISSION_VALIDATION must be 'strict' or 'passthrough', got '{other}'"
            ),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required store variable is missing or an enumerated
    /// value cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let store = StoreConfig::from_env().context("Failed to load record store configuration")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "text".to_string())
            .parse()?;

        let validation_mode = env::var("SUBMISSION_VALIDATION")
            .unwrap_or_else(|_| "strict".to_string())
            .parse()?;

        let dedup_window_seconds = env::var("SUBMISSION_DEDUP_WINDOW_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(600);

        let analytics_enabled = env::var("ANALYTICS_ENABLED")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);
        let analytics_key = env::var("POSTHOG_KEY").ok().filter(|k| !k.is_empty());
        let analytics_host =
            env::var("POSTHOG_HOST").unwrap_or_else(|_| DEFAULT_ANALYTICS_HOST.to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            store,
            validation_mode,
            dedup_window_seconds,
            analytics_enabled,
            analytics_key,
            analytics_host,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - a store setting is invalid (see [`StoreConfig::validate`])
    /// - analytics is enabled without a key, or the analytics host is not a URL
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        self.store.validate()?;

        if self.analytics_enabled {
            if self.analytics_key.is_none() {
                anyhow::bail!("POSTHOG_KEY must be set when ANALYTICS_ENABLED is true");
            }
            Url::parse(&self.analytics_host).with_context(|| {
                format!("POSTHOG_HOST must be a valid URL, got '{}'", self.analytics_host)
            })?;
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Store: {}", self.store.api_base);
        tracing::info!("  Store API version: {}", self.store.api_version);
        tracing::info!("  Store token: {}", mask_secret(&self.store.token));
        tracing::info!("  Listing collection: {}", self.store.listings_database_id);
        tracing::info!(
            "  Submission collection: {}",
            self.store.submissions_database_id
        );
        tracing::info!("  Submission validation: {:?}", self.validation_mode);

        if self.dedup_window_seconds > 0 {
            tracing::info!(
                "  Duplicate submission window: {}s",
                self.dedup_window_seconds
            );
        } else {
            tracing::info!("  Duplicate submission window: disabled");
        }

        tracing::info!(
            "  Analytics: {}",
            if self.analytics_enabled {
                "enabled"
            } else {
                "disabled"
            }
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {:?}", self.log_format);
    }
}

impl StoreConfig {
    /// Loads store settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `NOTION_TOKEN`, `NOTION_DATABASE_ID`, or
    /// `NOTION_DATABASE_ID_REQUESTS` is missing.
    pub fn from_env() -> Result<Self> {
        let token = env::var("NOTION_TOKEN").context("NOTION_TOKEN must be set")?;
        let listings_database_id =
            env::var("NOTION_DATABASE_ID").context("NOTION_DATABASE_ID must be set")?;
        let submissions_database_id = env::var("NOTION_DATABASE_ID_REQUESTS")
            .context("NOTION_DATABASE_ID_REQUESTS must be set")?;

        let api_base = env::var("NOTION_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let api_version =
            env::var("NOTION_VERSION").unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());
        let timeout_seconds = env::var("NOTION_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok());

        Ok(Self {
            api_base,
            api_version,
            token,
            listings_database_id,
            submissions_database_id,
            timeout_seconds,
        })
    }

    /// Validates store settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the token or a collection id is empty, the base URL
    /// is not HTTP(S), or the timeout is zero.
    pub fn validate(&self) -> Result<()> {
        if self.token.is_empty() {
            anyhow::bail!("NOTION_TOKEN must not be empty");
        }
        if self.listings_database_id.is_empty() {
            anyhow::bail!("NOTION_DATABASE_ID must not be empty");
        }
        if self.submissions_database_id.is_empty() {
            anyhow::bail!("NOTION_DATABASE_ID_REQUESTS must not be empty");
        }
        if self.api_version.is_empty() {
            anyhow::bail!("NOTION_VERSION must not be empty");
        }

        let base = Url::parse(&self.api_base).with_context(|| {
            format!("NOTION_API_BASE must be a valid URL, got '{}'", self.api_base)
        })?;
        if base.scheme() != "http" && base.scheme() != "https" {
            anyhow::bail!(
                "NOTION_API_BASE must use http or https, got '{}'",
                self.api_base
            );
        }

        if self.timeout_seconds == Some(0) {
            anyhow::bail!("NOTION_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }
}

/// Masks a credential for logging, keeping only its first four characters.
///
/// - `secret_abcdef` → `secr***`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 4 {
        return "***".to_string();
    }
    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
