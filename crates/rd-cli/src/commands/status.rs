use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatusArgs;
use crate::commands::shared::parse::require_text;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rdk status`.
pub async fn handle(args: &StatusArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let label = require_text(&args.label(), "status")?;
    let response = ctx.service.update_status(args.id, &label).await;
    output(&response, flags.format)
}
