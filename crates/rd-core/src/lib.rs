//! # rd-core
//!
//! Core types, case ID generation, and error types for RepairDesk.
//!
//! This crate provides the foundational types shared across all RepairDesk crates:
//! - The `Ticket` entity and its creation input
//! - View/response enums with their SQL and JSON string forms
//! - Case ID prefix constants and the random case ID generator
//! - The email notification seam (`EmailNotifier`) and its discardable `Delivery` result
//! - Response types returned to the presentation layer
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod notify;
pub mod responses;
