//! Notification rendering configuration.

use serde::{Deserialize, Serialize};

fn default_template_path() -> String {
    "email_template.html".to_string()
}

fn default_remarks() -> String {
    "Laboratory analysis in progress.".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotifyConfig {
    /// HTML email template. A built-in template is used when the file is missing.
    #[serde(default = "default_template_path")]
    pub template_path: String,

    /// Text substituted for `{remarks}` when a ticket has none.
    #[serde(default = "default_remarks")]
    pub default_remarks: String,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            template_path: default_template_path(),
            default_remarks: default_remarks(),
        }
    }
}
