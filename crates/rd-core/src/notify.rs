//! Email notification seam.
//!
//! The ticket service only knows this trait. `rd-notify` provides the SMTP
//! implementation; tests provide recording fakes. A notification attempt never
//! fails the enclosing ticket operation: it returns a [`Delivery`] that the
//! caller logs and drops.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Ticket;

/// Everything the email channel needs to describe a status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailNotice {
    pub recipient: Option<String>,
    pub model: String,
    pub case_id: String,
    pub status: String,
    pub remarks: Option<String>,
}

impl EmailNotice {
    /// Build a notice for `ticket` announcing `status`.
    #[must_use]
    pub fn for_ticket(ticket: &Ticket, status: &str) -> Self {
        Self {
            recipient: ticket.email.clone(),
            model: ticket.model.clone(),
            case_id: ticket.case_id.clone(),
            status: status.to_string(),
            remarks: ticket.remarks.clone(),
        }
    }
}

/// Outcome of a best-effort notification attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum Delivery {
    /// Handed to the transport successfully.
    Sent,
    /// Deliberately not attempted (e.g. no recipient address).
    Skipped(String),
    /// Attempted and failed; the string carries the reason for logs.
    Failed(String),
}

impl Delivery {
    #[must_use]
    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Sends status emails to customers.
#[allow(async_fn_in_trait)]
pub trait EmailNotifier {
    /// Attempt delivery of `notice`. Never errors; failures come back as
    /// [`Delivery::Failed`].
    async fn send_status_email(&self, notice: &EmailNotice) -> Delivery;
}
