use std::time::Duration;

use thiserror::Error;

/// Failures inside a notification channel.
///
/// Never crosses the channel boundary: the email channel turns these into
/// [`rd_core::notify::Delivery::Failed`] and the deep-link channel into
/// [`crate::LinkOutcome::Failed`].
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("mail relay not configured")]
    NotConfigured,

    #[error("failed to read template {path}: {source}")]
    Template {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid address {address:?}: {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("mail delivery timed out after {0:?}")]
    Timeout(Duration),

    #[error("failed to open {url}: {source}")]
    Open {
        url: String,
        #[source]
        source: std::io::Error,
    },
}
