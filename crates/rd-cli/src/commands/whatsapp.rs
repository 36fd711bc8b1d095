use anyhow::Context;
use rd_notify::{LinkOutcome, WhatsAppLinks};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::WhatsappArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct WhatsappResponse {
    existed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    links: Option<WhatsAppLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<LinkOutcome>,
}

/// Handle `rdk whatsapp`.
pub async fn handle(args: &WhatsappArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let ticket = ctx
        .service
        .get_ticket(args.id)
        .await
        .with_context(|| format!("failed to load ticket {}", args.id))?;

    let Some(ticket) = ticket else {
        return output(
            &WhatsappResponse {
                existed: false,
                links: None,
                outcome: None,
            },
            flags.format,
        );
    };

    let links = ctx.whatsapp.links(&ticket);
    let outcome = (!args.print_only).then(|| ctx.whatsapp.send(&ticket));

    output(
        &WhatsappResponse {
            existed: true,
            links: Some(links),
            outcome,
        },
        flags.format,
    )
}
