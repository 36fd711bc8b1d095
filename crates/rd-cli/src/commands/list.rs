use anyhow::Context;
use rd_core::enums::TicketView;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rdk list`.
pub async fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = parse_enum::<TicketView>(&args.view, "view")?;
    let tickets = ctx
        .service
        .list_tickets(args.search.as_deref(), view)
        .await
        .context("failed to list tickets")?;
    output(&tickets, flags.format)
}
