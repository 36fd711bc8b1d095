//! SMTP email channel.
//!
//! One transport is built per message; the front desk sends a handful of
//! emails a day and a pooled connection would only go stale between them.

use std::path::PathBuf;

use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use rd_config::{MailConfig, NotifyConfig, RepairDeskConfig};
use rd_core::entities::normalize_email;
use rd_core::notify::{Delivery, EmailNotice, EmailNotifier};

use crate::error::NotifyError;
use crate::template;

/// Sends status emails through the configured relay.
#[derive(Debug, Clone)]
pub struct EmailChannel {
    mail: MailConfig,
    template_path: PathBuf,
    default_remarks: String,
}

impl EmailChannel {
    #[must_use]
    pub fn new(mail: MailConfig, notify: NotifyConfig) -> Self {
        Self {
            mail,
            template_path: PathBuf::from(notify.template_path),
            default_remarks: notify.default_remarks,
        }
    }

    #[must_use]
    pub fn from_config(config: &RepairDeskConfig) -> Self {
        Self::new(config.mail.clone(), config.notify.clone())
    }

    /// Build the multipart message for `notice` addressed to `recipient`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] if the template cannot be read, an address does
    /// not parse, or the message cannot be assembled.
    pub async fn compose(
        &self,
        notice: &EmailNotice,
        recipient: &str,
    ) -> Result<Message, NotifyError> {
        let body = template::load(&self.template_path).await?;
        let html = template::render(&body, notice, &self.default_remarks);
        let plain = format!(
            "Technical Status Update: {} for your {}",
            notice.status, notice.model
        );

        let from = Mailbox::new(
            Some(self.mail.sender_name.clone()),
            parse_address(self.mail.sender())?,
        );
        let to = Mailbox::new(None, parse_address(recipient)?);

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(format!("Service Update: {} [{}]", notice.model, notice.case_id))
            .multipart(MultiPart::alternative_plain_html(plain, html))?;
        Ok(message)
    }

    async fn deliver(&self, notice: &EmailNotice, recipient: &str) -> Result<(), NotifyError> {
        if !self.mail.is_configured() {
            return Err(NotifyError::NotConfigured);
        }

        let message = self.compose(notice, recipient).await?;
        let timeout = self.mail.timeout();

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.mail.host)?
            .port(self.mail.port)
            .credentials(Credentials::new(
                self.mail.username.clone(),
                self.mail.password.clone(),
            ))
            .timeout(Some(timeout))
            .build();

        match tokio::time::timeout(timeout, mailer.send(message)).await {
            Ok(result) => {
                result?;
                Ok(())
            }
            Err(_) => Err(NotifyError::Timeout(timeout)),
        }
    }
}

impl EmailNotifier for EmailChannel {
    async fn send_status_email(&self, notice: &EmailNotice) -> Delivery {
        let Some(recipient) = normalize_email(notice.recipient.as_deref()) else {
            tracing::debug!(case_id = %notice.case_id, "no recipient, email skipped");
            return Delivery::Skipped("no recipient address".to_string());
        };

        match self.deliver(notice, &recipient).await {
            Ok(()) => {
                tracing::info!(case_id = %notice.case_id, %recipient, "status email delivered");
                Delivery::Sent
            }
            Err(error) => {
                tracing::warn!(case_id = %notice.case_id, %recipient, %error, "status email failed");
                Delivery::Failed(error.to_string())
            }
        }
    }
}

fn parse_address(raw: &str) -> Result<Address, NotifyError> {
    raw.trim()
        .parse::<Address>()
        .map_err(|source| NotifyError::Address {
            address: raw.to_string(),
            source,
        })
}
