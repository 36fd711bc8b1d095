//! Entity structs for RepairDesk domain objects.
//!
//! `Ticket` maps to the `tickets` table in the libSQL database. It derives
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON output and schema export.

mod ticket;

pub use ticket::{NewTicket, Ticket, normalize_email};
