//! WhatsApp deep-link channel.
//!
//! Builds a prefilled status message for a ticket and asks the desktop to open
//! it: the native app URI first, then WhatsApp Web in the browser.

use rd_config::MessagingConfig;
use rd_core::entities::Ticket;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NotifyError;

/// Hands a URL to the operating system.
pub trait LinkOpener {
    /// # Errors
    ///
    /// Returns [`NotifyError::Open`] when no handler accepted the URL.
    fn open(&self, url: &str) -> Result<(), NotifyError>;
}

/// Opens URLs with the platform's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), NotifyError> {
        open::that(url).map_err(|source| NotifyError::Open {
            url: url.to_string(),
            source,
        })
    }
}

/// Which link, if any, was handed off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum LinkOutcome {
    /// The WhatsApp app URI was opened.
    Native,
    /// The app was unavailable; WhatsApp Web was opened instead.
    Browser,
    /// Neither link could be opened.
    Failed(String),
}

/// Both forms of the link for one ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WhatsAppLinks {
    pub phone: String,
    pub native: String,
    pub web: String,
}

/// Keep digits only and add the country code to local numbers.
///
/// With the defaults, `012-345 6789` becomes `60123456789`.
#[must_use]
pub fn normalize_phone(raw: &str, messaging: &MessagingConfig) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if !messaging.trunk_prefix.is_empty() && digits.starts_with(&messaging.trunk_prefix) {
        format!("{}{digits}", messaging.country_code)
    } else {
        digits
    }
}

/// The status message sent to the customer.
#[must_use]
pub fn compose_message(ticket: &Ticket, messaging: &MessagingConfig) -> String {
    format!(
        "*{company} | TECHNICAL STATUS*\n\n\
         *Device Model:* {model}\n\
         *Case Number:* {case_id}\n\
         *Current Status:* {status}\n\n\
         Your unit is currently being processed by our technical team. \
         Kindly check your email for the service report and latest updates.",
        company = messaging.company_name,
        model = ticket.model,
        case_id = ticket.case_id,
        status = ticket.status.to_uppercase(),
    )
}

/// Native and web links carrying `text` to `phone`.
#[must_use]
pub fn build_links(phone: &str, text: &str) -> WhatsAppLinks {
    let text = urlencoding::encode(text);
    WhatsAppLinks {
        phone: phone.to_string(),
        native: format!("whatsapp://send?phone={phone}&text={text}"),
        web: format!("https://web.whatsapp.com/send?phone={phone}&text={text}"),
    }
}

/// Operator-triggered WhatsApp notification.
pub struct DeepLinkChannel<O> {
    messaging: MessagingConfig,
    opener: O,
}

impl<O: LinkOpener> DeepLinkChannel<O> {
    pub const fn new(messaging: MessagingConfig, opener: O) -> Self {
        Self { messaging, opener }
    }

    pub const fn opener(&self) -> &O {
        &self.opener
    }

    /// Links for `ticket` without opening anything.
    #[must_use]
    pub fn links(&self, ticket: &Ticket) -> WhatsAppLinks {
        let phone = normalize_phone(&ticket.phone, &self.messaging);
        build_links(&phone, &compose_message(ticket, &self.messaging))
    }

    /// Open the app link for `ticket`, falling back to WhatsApp Web.
    pub fn send(&self, ticket: &Ticket) -> LinkOutcome {
        let links = self.links(ticket);

        let native_error = match self.opener.open(&links.native) {
            Ok(()) => {
                tracing::info!(case_id = %ticket.case_id, phone = %links.phone, "opened WhatsApp");
                return LinkOutcome::Native;
            }
            Err(error) => error,
        };
        tracing::debug!(case_id = %ticket.case_id, error = %native_error, "WhatsApp app unavailable, trying web");

        match self.opener.open(&links.web) {
            Ok(()) => {
                tracing::info!(case_id = %ticket.case_id, phone = %links.phone, "opened WhatsApp Web");
                LinkOutcome::Browser
            }
            Err(error) => {
                tracing::warn!(case_id = %ticket.case_id, %error, "could not open WhatsApp link");
                LinkOutcome::Failed(error.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    /// Records requested URLs and refuses any that start with a blocked scheme.
    struct FakeOpener {
        blocked: Vec<&'static str>,
        opened: RefCell<Vec<String>>,
    }

    impl FakeOpener {
        fn refusing(blocked: &[&'static str]) -> Self {
            Self {
                blocked: blocked.to_vec(),
                opened: RefCell::new(Vec::new()),
            }
        }
    }

    impl LinkOpener for FakeOpener {
        fn open(&self, url: &str) -> Result<(), NotifyError> {
            self.opened.borrow_mut().push(url.to_string());
            if self.blocked.iter().any(|scheme| url.starts_with(scheme)) {
                return Err(NotifyError::Open {
                    url: url.to_string(),
                    source: std::io::Error::other("no handler"),
                });
            }
            Ok(())
        }
    }

    fn ticket() -> Ticket {
        Ticket {
            id: 1,
            case_id: "CMT-ABC12345".into(),
            phone: "0123456789".into(),
            email: None,
            model: "AlphaX".into(),
            status: "Ready for Pickup".into(),
            remarks: None,
            date: "2026-02-09 14:30".into(),
        }
    }

    #[rstest]
    #[case("0123456789", "60123456789")]
    #[case("012-345 6789", "60123456789")]
    #[case("+60123456789", "60123456789")]
    #[case("0212345678", "0212345678")]
    #[case("6591234567", "6591234567")]
    #[case("", "")]
    fn normalize_phone_cases(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_phone(raw, &MessagingConfig::default()), expected);
    }

    #[test]
    fn message_names_company_model_case_and_status() {
        let text = compose_message(&ticket(), &MessagingConfig::default());
        assert_eq!(
            text,
            "*CHUA MICRO TECH | TECHNICAL STATUS*\n\n\
             *Device Model:* AlphaX\n\
             *Case Number:* CMT-ABC12345\n\
             *Current Status:* READY FOR PICKUP\n\n\
             Your unit is currently being processed by our technical team. \
             Kindly check your email for the service report and latest updates."
        );
    }

    #[test]
    fn links_encode_text() {
        let links = build_links("60123456789", "*A B*\nC&D");
        assert_eq!(links.native, "whatsapp://send?phone=60123456789&text=%2AA%20B%2A%0AC%26D");
        assert_eq!(
            links.web,
            "https://web.whatsapp.com/send?phone=60123456789&text=%2AA%20B%2A%0AC%26D"
        );
    }

    #[test]
    fn native_link_preferred() {
        let channel = DeepLinkChannel::new(MessagingConfig::default(), FakeOpener::refusing(&[]));
        assert_eq!(channel.send(&ticket()), LinkOutcome::Native);

        let opened = channel.opener().opened.borrow();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with("whatsapp://send?phone=60123456789&text="));
    }

    #[test]
    fn falls_back_to_web() {
        let channel = DeepLinkChannel::new(
            MessagingConfig::default(),
            FakeOpener::refusing(&["whatsapp://"]),
        );
        assert_eq!(channel.send(&ticket()), LinkOutcome::Browser);

        let opened = channel.opener().opened.borrow();
        assert_eq!(opened.len(), 2);
        assert!(opened[1].starts_with("https://web.whatsapp.com/send?phone=60123456789"));
    }

    #[test]
    fn reports_failure_when_nothing_opens() {
        let channel = DeepLinkChannel::new(
            MessagingConfig::default(),
            FakeOpener::refusing(&["whatsapp://", "https://"]),
        );
        assert!(matches!(channel.send(&ticket()), LinkOutcome::Failed(_)));
    }
}
