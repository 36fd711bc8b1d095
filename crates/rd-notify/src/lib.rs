//! # rd-notify
//!
//! Customer notification channels for RepairDesk.
//!
//! - [`EmailChannel`]: status emails over authenticated SMTP with implicit
//!   TLS. Implements [`rd_core::notify::EmailNotifier`] so the ticket service
//!   can drive it after every successful write.
//! - [`DeepLinkChannel`]: builds a prefilled WhatsApp message for a ticket and
//!   hands the link to the desktop. Operator-triggered only.
//!
//! Neither channel returns an error to its caller. Failures are logged and
//! reported as a value the caller is free to drop.

pub mod deep_link;
pub mod email;
pub mod error;
pub mod template;

pub use deep_link::{DeepLinkChannel, LinkOpener, LinkOutcome, SystemOpener, WhatsAppLinks};
pub use email::EmailChannel;
pub use error::NotifyError;
