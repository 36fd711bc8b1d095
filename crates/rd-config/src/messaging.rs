//! WhatsApp deep-link configuration.

use serde::{Deserialize, Serialize};

fn default_company_name() -> String {
    "CHUA MICRO TECH".to_string()
}

fn default_country_code() -> String {
    "6".to_string()
}

fn default_trunk_prefix() -> String {
    "01".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessagingConfig {
    /// Company name in the message header line.
    #[serde(default = "default_company_name")]
    pub company_name: String,

    /// Digits prepended to local numbers.
    #[serde(default = "default_country_code")]
    pub country_code: String,

    /// Leading digits that mark a number as local (`0123456789` → `60123456789`).
    #[serde(default = "default_trunk_prefix")]
    pub trunk_prefix: String,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            country_code: default_country_code(),
            trunk_prefix: default_trunk_prefix(),
        }
    }
}
