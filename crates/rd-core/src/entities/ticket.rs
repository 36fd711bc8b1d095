use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A repair case tracked by the front desk.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Ticket {
    /// Surrogate key assigned by the store.
    pub id: i64,
    /// Human-shareable case number, e.g. `CMT-7Q2ZK0PA`.
    pub case_id: String,
    pub phone: String,
    pub email: Option<String>,
    pub model: String,
    /// Free-text label. `"Completed"` moves the ticket to the completed view.
    pub status: String,
    pub remarks: Option<String>,
    /// Local creation time, minute resolution (`%Y-%m-%d %H:%M`).
    pub date: String,
}

impl Ticket {
    /// Whether the ticket sits in the completed view.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == crate::enums::STATUS_COMPLETED
    }
}

/// Column values for a ticket that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    pub case_id: String,
    pub phone: String,
    pub email: Option<String>,
    pub model: String,
    pub status: String,
    pub remarks: Option<String>,
    pub date: String,
}

impl NewTicket {
    /// Attach the store-assigned id.
    #[must_use]
    pub fn into_ticket(self, id: i64) -> Ticket {
        Ticket {
            id,
            case_id: self.case_id,
            phone: self.phone,
            email: self.email,
            model: self.model,
            status: self.status,
            remarks: self.remarks,
            date: self.date,
        }
    }
}

/// Normalize a customer email address.
///
/// Returns `None` for missing, blank, or the literal `none` (any case);
/// otherwise the trimmed address.
#[must_use]
pub fn normalize_email(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return None;
    }
    Some(trimmed.to_string())
}
