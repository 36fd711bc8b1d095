//! Case ID generation.
//!
//! A case ID is an organizational prefix, a dash, and eight characters drawn
//! from `[A-Z0-9]`, e.g. `CMT-7Q2ZK0PA`. Uniqueness is not checked here; the
//! store's `UNIQUE` constraint rejects collisions.

use crate::errors::CoreError;

/// Default organizational prefix.
pub const DEFAULT_CASE_PREFIX: &str = "CMT";

/// Number of random characters after the prefix.
pub const CASE_CODE_LEN: usize = 8;

const ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Largest multiple of 36 that fits in a byte; bytes at or above it are rejected.
const ACCEPT_BELOW: u8 = 252;

/// Generate a fresh case ID such as `CMT-7Q2ZK0PA`.
///
/// # Errors
///
/// Returns `CoreError::Random` if the OS random source is unavailable.
pub fn generate_case_id(prefix: &str) -> Result<String, CoreError> {
    let mut code = String::with_capacity(CASE_CODE_LEN);
    let mut buf = [0u8; 16];

    while code.len() < CASE_CODE_LEN {
        getrandom::fill(&mut buf).map_err(|e| CoreError::Random(e.to_string()))?;
        for byte in buf {
            if byte >= ACCEPT_BELOW {
                continue;
            }
            code.push(char::from(ALPHABET[usize::from(byte % 36)]));
            if code.len() == CASE_CODE_LEN {
                break;
            }
        }
    }

    Ok(format!("{prefix}-{code}"))
}

/// Check that `candidate` is `<prefix>-` followed by eight `[A-Z0-9]` characters.
#[must_use]
pub fn is_case_id(prefix: &str, candidate: &str) -> bool {
    candidate
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|code| {
            code.len() == CASE_CODE_LEN
                && code
                    .bytes()
                    .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        })
}
