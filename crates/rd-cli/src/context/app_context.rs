use std::path::PathBuf;

use anyhow::Context;
use rd_config::RepairDeskConfig;
use rd_db::TicketStore;
use rd_db::service::TicketService;
use rd_notify::{DeepLinkChannel, EmailChannel, SystemOpener};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: TicketService<EmailChannel>,
    pub whatsapp: DeepLinkChannel<SystemOpener>,
    pub config: RepairDeskConfig,
    pub database: PathBuf,
}

impl AppContext {
    /// Build the service stack and make sure the schema exists.
    ///
    /// `database_override` (from `--database`) wins over `general.database_path`.
    pub async fn init(
        config: RepairDeskConfig,
        database_override: Option<&str>,
    ) -> anyhow::Result<Self> {
        let database = PathBuf::from(database_override.unwrap_or(&config.general.database_path));

        let service = TicketService::new(
            TicketStore::new(&database),
            EmailChannel::from_config(&config),
            config.general.case_prefix.clone(),
        );
        service
            .initialize()
            .await
            .with_context(|| format!("failed to open ticket database {}", database.display()))?;

        let whatsapp = DeepLinkChannel::new(config.messaging.clone(), SystemOpener);

        Ok(Self {
            service,
            whatsapp,
            config,
            database,
        })
    }
}
