use schemars::schema_for;

use rd_core::entities::Ticket;
use rd_core::notify::Delivery;
use rd_core::responses::{
    CreateTicketResponse, DeleteTicketResponse, ResendEmailResponse, SetStatusResponse,
};
use rd_notify::{LinkOutcome, WhatsAppLinks};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Type names accepted by `rdk schema`.
pub const SCHEMA_TYPES: &[&str] = &[
    "ticket",
    "create-response",
    "status-response",
    "delete-response",
    "resend-response",
    "delivery",
    "whatsapp-links",
    "link-outcome",
];

/// Handle `rdk schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_value(&args.type_name)?;
    output(&schema, flags.format)
}

fn schema_value(type_name: &str) -> anyhow::Result<serde_json::Value> {
    let schema = match type_name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
        "ticket" => schema_for!(Ticket),
        "create-response" => schema_for!(CreateTicketResponse),
        "status-response" => schema_for!(SetStatusResponse),
        "delete-response" => schema_for!(DeleteTicketResponse),
        "resend-response" => schema_for!(ResendEmailResponse),
        "delivery" => schema_for!(Delivery),
        "whatsapp-links" => schema_for!(WhatsAppLinks),
        "link-outcome" => schema_for!(LinkOutcome),
        _ => anyhow::bail!(
            "unknown schema type '{type_name}' (expected one of: {})",
            SCHEMA_TYPES.join(", ")
        ),
    };
    Ok(serde_json::to_value(schema)?)
}
