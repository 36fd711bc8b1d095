//! Repository modules implementing CRUD operations for RepairDesk entities.
//!
//! Each module adds methods to `TicketStore` via `impl TicketStore` blocks.

pub mod ticket;
