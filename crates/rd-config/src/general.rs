//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_database_path() -> String {
    "database.db".to_string()
}

fn default_case_prefix() -> String {
    rd_core::ids::DEFAULT_CASE_PREFIX.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Path of the libSQL database file holding the `tickets` table.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Organizational prefix of generated case IDs (e.g. `CMT` in `CMT-7Q2ZK0PA`).
    #[serde(default = "default_case_prefix")]
    pub case_prefix: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            case_prefix: default_case_prefix(),
        }
    }
}

impl GeneralConfig {
    /// Check that the case prefix is non-empty uppercase alphanumeric.
    pub fn validate(&self) -> Result<(), crate::ConfigError> {
        let prefix = &self.case_prefix;
        if prefix.is_empty()
            || !prefix
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(crate::ConfigError::InvalidValue {
                field: "general.case_prefix".into(),
                reason: format!("'{prefix}' must be uppercase letters or digits"),
            });
        }
        Ok(())
    }
}
