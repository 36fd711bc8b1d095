//! Views, response flags, and failure reasons for RepairDesk.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Ticket status itself is free text; only the two labels below carry meaning.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status assigned to every newly created ticket.
pub const STATUS_LOGGED: &str = "Case Logged";

/// Terminal status label. Tickets carrying it leave the active view.
pub const STATUS_COMPLETED: &str = "Completed";

// ---------------------------------------------------------------------------
// TicketView
// ---------------------------------------------------------------------------

/// Partition of the ticket list shown to the operator.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TicketView {
    /// Every ticket whose status is not `"Completed"`.
    #[default]
    Active,
    /// Tickets whose status is exactly `"Completed"`.
    Completed,
}

impl TicketView {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// SQL comparison operator against [`STATUS_COMPLETED`].
    #[must_use]
    pub const fn status_operator(self) -> &'static str {
        match self {
            Self::Active => "!=",
            Self::Completed => "=",
        }
    }
}

impl fmt::Display for TicketView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ResponseStatus
// ---------------------------------------------------------------------------

/// Coarse outcome flag of a ticket operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
    Error,
}

impl ResponseStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FailureReason
// ---------------------------------------------------------------------------

/// Reason code attached to a failed operation for observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// The referenced ticket id does not exist.
    NotFound,
    /// The generated case ID collided with an existing ticket.
    DuplicateCaseId,
    /// The database could not be opened or written.
    Storage,
    /// Caller-supplied input was rejected before reaching the store.
    InvalidInput,
    /// Anything else (e.g. the random source failed while generating a case ID).
    Internal,
}

impl FailureReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::DuplicateCaseId => "duplicate_case_id",
            Self::Storage => "storage",
            Self::InvalidInput => "invalid_input",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
