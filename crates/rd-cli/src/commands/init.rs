use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InitResponse {
    initialized: bool,
    database: String,
    mail_configured: bool,
}

/// Handle `rdk init`.
///
/// The schema is created while the context starts, so this only reports
/// where the database lives.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = InitResponse {
        initialized: true,
        database: ctx.database.display().to_string(),
        mail_configured: ctx.config.mail.is_configured(),
    };
    output(&response, flags.format)
}
