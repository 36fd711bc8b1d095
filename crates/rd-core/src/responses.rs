//! Response types returned by the ticket service to the presentation layer.
//!
//! Each keeps the simple success flag callers check, plus an optional
//! [`FailureReason`] for logs and scripted callers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{FailureReason, ResponseStatus};
use crate::notify::Delivery;

/// Response from `create_ticket`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreateTicketResponse {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FailureReason>,
}

impl CreateTicketResponse {
    #[must_use]
    pub const fn success(case_id: String) -> Self {
        Self {
            status: ResponseStatus::Success,
            case_id: Some(case_id),
            reason: None,
        }
    }

    #[must_use]
    pub const fn error(reason: FailureReason) -> Self {
        Self {
            status: ResponseStatus::Error,
            case_id: None,
            reason: Some(reason),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}

/// Response from `update_status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SetStatusResponse {
    /// Whether the ticket existed (and was updated).
    pub existed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FailureReason>,
}

impl SetStatusResponse {
    #[must_use]
    pub const fn updated() -> Self {
        Self {
            existed: true,
            reason: None,
        }
    }

    #[must_use]
    pub const fn failed(reason: FailureReason) -> Self {
        Self {
            existed: false,
            reason: Some(reason),
        }
    }
}

/// Response from `delete_ticket`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteTicketResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FailureReason>,
}

/// Response from `resend_email`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResendEmailResponse {
    pub existed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Delivery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FailureReason>,
}
