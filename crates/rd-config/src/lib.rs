//! # rd-config
//!
//! Layered configuration loading for RepairDesk using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`REPAIRDESK_*` prefix, `__` as separator)
//! 2. External secret overrides (see `rd-secrets`)
//! 3. Project-level `./repairdesk.toml`
//! 4. User-level `~/.config/repairdesk/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `REPAIRDESK_MAIL__PASSWORD` -> `mail.password`,
//! `REPAIRDESK_GENERAL__DATABASE_PATH` -> `general.database_path`, etc.
//! The `__` (double underscore) separates nested config sections. Values for
//! string settings are taken verbatim (`REPAIRDESK_MESSAGING__TRUNK_PREFIX=01`
//! stays `"01"`); numeric settings such as `mail.port` are parsed.
//!
//! # Usage
//!
//! ```no_run
//! use rd_config::RepairDeskConfig;
//!
//! let config = RepairDeskConfig::load().expect("config");
//!
//! if config.mail.is_configured() {
//!     println!("Relay: {}:{}", config.mail.host, config.mail.port);
//! }
//! ```

mod error;
mod general;
mod mail;
mod messaging;
mod notify;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use mail::MailConfig;
pub use messaging::MessagingConfig;
pub use notify::NotifyConfig;

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix shared by every environment variable RepairDesk reads.
pub const ENV_PREFIX: &str = "REPAIRDESK_";

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_FILE: &str = "repairdesk.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RepairDeskConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
    #[serde(default)]
    pub messaging: MessagingConfig,
}

impl RepairDeskConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `.env` files are not read here; the CLI bootstrap loads them first.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env_overrides(&[])
    }

    /// Load configuration, layering externally resolved `REPAIRDESK_*` values
    /// beneath the process environment.
    ///
    /// Keys use the environment naming (`REPAIRDESK_MAIL__PASSWORD`); keys
    /// without the prefix are ignored.
    pub fn load_with_env_overrides(overrides: &[(String, String)]) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_with_overrides(overrides).extract()?;
        config.general.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain without external overrides.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        Self::figment_with_overrides(&[])
    }

    fn figment_with_overrides(overrides: &[(String, String)]) -> Figment {
        let defaults = Self::default();
        let mut figment = Figment::from(Serialized::defaults(&defaults));
        let default_values = Value::serialize(&defaults).ok();

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: External secret overrides
        figment = merge_env_style(figment, default_values.as_ref(), overrides.iter().cloned());

        // Layer 4: Environment variables (highest priority)
        let mut env = std::env::vars()
            .filter(|(key, _)| key.starts_with(ENV_PREFIX))
            .collect::<Vec<_>>();
        env.sort();
        merge_env_style(figment, default_values.as_ref(), env)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("repairdesk").join("config.toml"))
    }
}

/// Merge `REPAIRDESK_*`-named pairs into `figment`, later pairs winning.
fn merge_env_style(
    mut figment: Figment,
    defaults: Option<&Value>,
    pairs: impl IntoIterator<Item = (String, String)>,
) -> Figment {
    for (key, raw) in pairs {
        let Some(path) = override_key_path(&key) else {
            continue;
        };
        let value = typed_value(defaults, &path, &raw);
        figment = figment.merge(Serialized::default(&path, value));
    }
    figment
}

/// Interpret `raw` with the type the default value at `path` has.
///
/// String settings stay verbatim, so `01` and all-digit passwords survive.
/// Everything else (ports, timeouts, unknown keys) is parsed as figment parses
/// environment values.
fn typed_value(defaults: Option<&Value>, path: &str, raw: &str) -> Value {
    match defaults.and_then(|values| values.find_ref(path)) {
        Some(Value::String(..)) => Value::from(raw.to_string()),
        _ => raw.parse().unwrap_or_else(|never| match never {}),
    }
}

/// Map `REPAIRDESK_MAIL__PASSWORD` to the figment key `mail.password`.
fn override_key_path(key: &str) -> Option<String> {
    let rest = key.strip_prefix(ENV_PREFIX)?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.to_ascii_lowercase().replace("__", "."))
}
