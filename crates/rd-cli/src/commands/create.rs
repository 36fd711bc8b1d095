use crate::cli::GlobalFlags;
use crate::cli::root_commands::CreateArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rdk create`.
pub async fn handle(args: &CreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = ctx
        .service
        .create_ticket(
            &args.phone,
            args.email.as_deref(),
            &args.model,
            args.remarks.as_deref(),
        )
        .await;
    output(&response, flags.format)
}
