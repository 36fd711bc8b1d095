//! Cross-cutting error types for RepairDesk.
//!
//! Domain-specific errors (`DatabaseError`, `NotifyError`, `ConfigError`) are
//! defined in their respective crates. `rd-cli` converges them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any RepairDesk crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The operating system random source failed.
    #[error("Random source unavailable: {0}")]
    Random(String),
}
