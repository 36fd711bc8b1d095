use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create the ticket database if it does not exist.
    Init,
    /// Log a new repair ticket.
    Create(CreateArgs),
    /// List tickets, newest first.
    List(ListArgs),
    /// Change a ticket's status and email the customer.
    Status(StatusArgs),
    /// Delete a ticket.
    Delete(IdArgs),
    /// Resend the current status email for a ticket.
    Resend(IdArgs),
    /// Open a prefilled WhatsApp message for a ticket.
    Whatsapp(WhatsappArgs),
    /// Print the JSON Schema of a record type.
    Schema(SchemaArgs),
}

/// Arguments for `rdk create`.
#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    /// Customer phone number.
    #[arg(long)]
    pub phone: String,
    /// Device model.
    #[arg(long)]
    pub model: String,
    /// Customer email; omit for no email notifications.
    #[arg(long)]
    pub email: Option<String>,
    /// Intake notes.
    #[arg(long)]
    pub remarks: Option<String>,
}

/// Arguments for `rdk list`.
#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Substring of phone, email, case ID, or model.
    #[arg(short, long)]
    pub search: Option<String>,
    /// Which tickets to show: active or completed.
    #[arg(long, default_value = "active")]
    pub view: String,
}

/// Arguments for `rdk status`.
#[derive(Clone, Debug, Args)]
pub struct StatusArgs {
    pub id: i64,
    /// New status label; multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub status: Vec<String>,
}

impl StatusArgs {
    #[must_use]
    pub fn label(&self) -> String {
        self.status.join(" ")
    }
}

/// A single ticket id.
#[derive(Clone, Debug, Args)]
pub struct IdArgs {
    pub id: i64,
}

/// Arguments for `rdk whatsapp`.
#[derive(Clone, Debug, Args)]
pub struct WhatsappArgs {
    pub id: i64,
    /// Print the links instead of opening them.
    #[arg(long)]
    pub print_only: bool,
}

/// Arguments for `rdk schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(default_value = "ticket")]
    pub type_name: String,
}
