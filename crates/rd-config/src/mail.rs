//! Outbound mail relay configuration.
//!
//! Credentials are deployment configuration: set them through
//! `REPAIRDESK_MAIL__USERNAME` / `REPAIRDESK_MAIL__PASSWORD`, a TOML file, or
//! the external secrets backend. Nothing here ships a working default.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "smtp.gmail.com".to_string()
}

/// Implicit-TLS submission port.
const fn default_port() -> u16 {
    465
}

fn default_sender_name() -> String {
    "Chua Micro Tech".to_string()
}

const fn default_timeout_secs() -> u64 {
    20
}

#[derive(Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// SMTP relay host.
    #[serde(default = "default_host")]
    pub host: String,

    /// SMTP relay port (implicit TLS).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Login for the relay; also the sender address unless `sender_address` is set.
    #[serde(default)]
    pub username: String,

    /// Password or app password for the relay.
    #[serde(default)]
    pub password: String,

    /// Envelope/From address. Empty means `username`.
    #[serde(default)]
    pub sender_address: String,

    /// Display name in the From header.
    #[serde(default = "default_sender_name")]
    pub sender_name: String,

    /// Upper bound for connecting, authenticating, and sending one message.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            username: String::new(),
            password: String::new(),
            sender_address: String::new(),
            sender_name: default_sender_name(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &if self.password.is_empty() { "" } else { "<redacted>" })
            .field("sender_address", &self.sender_address)
            .field("sender_name", &self.sender_name)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl MailConfig {
    /// Check if credentials for the relay are present.
    pub fn is_configured(&self) -> bool {
        !self.host.is_empty() && !self.username.is_empty() && !self.password.is_empty()
    }

    /// Address used in the From header.
    pub fn sender(&self) -> &str {
        if self.sender_address.is_empty() {
            &self.username
        } else {
            &self.sender_address
        }
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
