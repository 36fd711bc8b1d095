//! HTML body rendering for status emails.
//!
//! Templates are plain HTML with four placeholders:
//! `{status}` (uppercased), `{model}`, `{case_id}`, and `{remarks}`.

use std::io::ErrorKind;
use std::path::Path;

use rd_core::notify::EmailNotice;

use crate::error::NotifyError;

/// Body used when no template file is present.
pub const FALLBACK_TEMPLATE: &str =
    "<html><body><h1>Service Update</h1><p>{status}: {model} [{case_id}]</p></body></html>";

/// Read the template at `path`, or the built-in one if the file does not exist.
///
/// # Errors
///
/// Returns [`NotifyError::Template`] if the file exists but cannot be read.
pub async fn load(path: &Path) -> Result<String, NotifyError> {
    match tokio::fs::read_to_string(path).await {
        Ok(body) => Ok(body),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no email template, using built-in");
            Ok(FALLBACK_TEMPLATE.to_string())
        }
        Err(source) => Err(NotifyError::Template {
            path: path.display().to_string(),
            source,
        }),
    }
}

/// Substitute the notice into `template`.
///
/// Missing or blank remarks become `default_remarks`. The template is scanned
/// once: placeholder text inside substituted values is left as typed.
#[must_use]
pub fn render(template: &str, notice: &EmailNotice, default_remarks: &str) -> String {
    let remarks = notice
        .remarks
        .as_deref()
        .filter(|r| !r.trim().is_empty())
        .unwrap_or(default_remarks);
    let status = notice.status.to_uppercase();
    let placeholders: [(&str, &str); 4] = [
        ("{status}", &status),
        ("{model}", &notice.model),
        ("{case_id}", &notice.case_id),
        ("{remarks}", remarks),
    ];

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        rest = &rest[start..];
        match placeholders.iter().find(|(name, _)| rest.starts_with(name)) {
            Some((name, value)) => {
                out.push_str(value);
                rest = &rest[name.len()..];
            }
            None => {
                out.push('{');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
