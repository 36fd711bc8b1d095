//! Ticket service orchestrating storage and customer notification.
//!
//! `TicketService` wraps `TicketStore` (raw persistence) and an
//! [`EmailNotifier`] (best-effort delivery). Every mutation follows this
//! protocol:
//! 1. Validate input and generate identifiers
//! 2. Write through the store
//! 3. Only after the write succeeded, attempt the notification
//! 4. Log the delivery outcome and drop it
//!
//! A notification outcome never changes the operation's response.

use chrono::Local;
use rd_core::entities::{NewTicket, Ticket, normalize_email};
use rd_core::enums::{FailureReason, STATUS_LOGGED, TicketView};
use rd_core::ids::generate_case_id;
use rd_core::notify::{Delivery, EmailNotice, EmailNotifier};
use rd_core::responses::{
    CreateTicketResponse, DeleteTicketResponse, ResendEmailResponse, SetStatusResponse,
};

use crate::TicketStore;
use crate::error::DatabaseError;

/// Creation timestamp format (minute resolution).
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct TicketService<E> {
    store: TicketStore,
    notifier: E,
    case_prefix: String,
}

impl<E: EmailNotifier> TicketService<E> {
    /// Create a service over `store` that notifies through `notifier` and
    /// prefixes case IDs with `case_prefix`.
    pub fn new(store: TicketStore, notifier: E, case_prefix: impl Into<String>) -> Self {
        Self {
            store,
            notifier,
            case_prefix: case_prefix.into(),
        }
    }

    /// Access the underlying store.
    #[must_use]
    pub const fn store(&self) -> &TicketStore {
        &self.store
    }

    /// Access the email notifier.
    #[must_use]
    pub const fn notifier(&self) -> &E {
        &self.notifier
    }

    /// Create the schema if absent. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn initialize(&self) -> Result<(), DatabaseError> {
        self.store.initialize().await
    }

    /// Log a new ticket and, when the customer left an address, email them.
    ///
    /// The insert happens first: a failed insert never sends anything. A case
    /// ID collision fails the creation with `duplicate_case_id`; the caller
    /// may simply retry.
    pub async fn create_ticket(
        &self,
        phone: &str,
        email: Option<&str>,
        model: &str,
        remarks: Option<&str>,
    ) -> CreateTicketResponse {
        if phone.trim().is_empty() || model.trim().is_empty() {
            tracing::warn!("ticket rejected: phone and model are required");
            return CreateTicketResponse::error(FailureReason::InvalidInput);
        }

        let case_id = match generate_case_id(&self.case_prefix) {
            Ok(id) => id,
            Err(error) => {
                tracing::error!(%error, "case id generation failed");
                return CreateTicketResponse::error(FailureReason::Internal);
            }
        };

        let new_ticket = NewTicket {
            case_id,
            phone: phone.to_string(),
            email: normalize_email(email),
            model: model.to_string(),
            status: STATUS_LOGGED.to_string(),
            remarks: remarks.map(String::from),
            date: Local::now().format(DATE_FORMAT).to_string(),
        };

        let ticket = match self.store.insert(new_ticket).await {
            Ok(ticket) => ticket,
            Err(error) => {
                tracing::error!(%error, "ticket insert failed");
                return CreateTicketResponse::error(failure_reason(&error));
            }
        };
        tracing::info!(case_id = %ticket.case_id, id = ticket.id, "ticket logged");

        if ticket.email.is_some() {
            let notice = EmailNotice::for_ticket(&ticket, STATUS_LOGGED);
            let delivery = self.notifier.send_status_email(&notice).await;
            log_delivery(&ticket.case_id, &delivery);
        } else {
            tracing::debug!(case_id = %ticket.case_id, "logged without email; no notification");
        }

        CreateTicketResponse::success(ticket.case_id)
    }

    /// List tickets in `view`, optionally filtered by `search`, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_tickets(
        &self,
        search: Option<&str>,
        view: TicketView,
    ) -> Result<Vec<Ticket>, DatabaseError> {
        self.store.query(search, view).await
    }

    /// Fetch one ticket by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_ticket(&self, id: i64) -> Result<Option<Ticket>, DatabaseError> {
        self.store.get(id).await
    }

    /// Change the status of ticket `id` and email the customer.
    ///
    /// `existed` is false, with nothing written and nothing sent, when the id
    /// is unknown or the store fails.
    pub async fn update_status(&self, id: i64, new_status: &str) -> SetStatusResponse {
        let ticket = match self.store.update_status(id, new_status).await {
            Ok(Some(ticket)) => ticket,
            Ok(None) => {
                tracing::debug!(id, "status update for unknown ticket");
                return SetStatusResponse::failed(FailureReason::NotFound);
            }
            Err(error) => {
                tracing::error!(%error, id, "status update failed");
                return SetStatusResponse::failed(failure_reason(&error));
            }
        };
        tracing::info!(case_id = %ticket.case_id, status = new_status, "status updated");

        let notice = EmailNotice::for_ticket(&ticket, new_status);
        let delivery = self.notifier.send_status_email(&notice).await;
        log_delivery(&ticket.case_id, &delivery);

        SetStatusResponse::updated()
    }

    /// Send the current-status email for ticket `id` again, without changing it.
    pub async fn resend_email(&self, id: i64) -> ResendEmailResponse {
        let ticket = match self.store.get(id).await {
            Ok(Some(ticket)) => ticket,
            Ok(None) => {
                return ResendEmailResponse {
                    existed: false,
                    delivery: None,
                    reason: Some(FailureReason::NotFound),
                };
            }
            Err(error) => {
                tracing::error!(%error, id, "resend lookup failed");
                return ResendEmailResponse {
                    existed: false,
                    delivery: None,
                    reason: Some(failure_reason(&error)),
                };
            }
        };

        let notice = EmailNotice::for_ticket(&ticket, &ticket.status);
        let delivery = self.notifier.send_status_email(&notice).await;
        log_delivery(&ticket.case_id, &delivery);

        ResendEmailResponse {
            existed: true,
            delivery: Some(delivery),
            reason: None,
        }
    }

    /// Delete ticket `id`. Deleting an unknown id still succeeds.
    pub async fn delete_ticket(&self, id: i64) -> DeleteTicketResponse {
        match self.store.delete(id).await {
            Ok(removed) => {
                tracing::info!(id, removed, "ticket deleted");
                DeleteTicketResponse {
                    success: true,
                    reason: None,
                }
            }
            Err(error) => {
                tracing::error!(%error, id, "ticket delete failed");
                DeleteTicketResponse {
                    success: false,
                    reason: Some(failure_reason(&error)),
                }
            }
        }
    }
}

/// Reason code reported to callers for a storage error.
#[must_use]
pub const fn failure_reason(error: &DatabaseError) -> FailureReason {
    match error {
        DatabaseError::DuplicateCaseId(_) => FailureReason::DuplicateCaseId,
        DatabaseError::Migration(_) | DatabaseError::Io(_) | DatabaseError::LibSql(_) => {
            FailureReason::Storage
        }
    }
}

fn log_delivery(case_id: &str, delivery: &Delivery) {
    match delivery {
        Delivery::Sent => tracing::info!(case_id, "status email sent"),
        Delivery::Skipped(reason) => tracing::debug!(case_id, %reason, "status email skipped"),
        Delivery::Failed(reason) => tracing::warn!(case_id, %reason, "status email failed"),
    }
}
