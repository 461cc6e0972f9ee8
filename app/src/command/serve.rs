use std::sync::Arc;
use tracing::{info, warn};
use validarfc_config::Config;
use validarfc_core::ValidationService;
use validarfc_server::Server;
use validarfc_storage::ValidationStore;

use super::CommandStrategy;

/// Input for the serve command. Each field overrides the config file.
#[derive(Debug, Clone, Default)]
pub struct ServeInput {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_url: Option<String>,
}

impl ServeInput {
    fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = self.database_url {
            config.database.url = url;
        }
    }
}

/// Strategy for running the HTTP API.
///
/// The database pool is lazy: the server starts even when the database is
/// unreachable, and serves degraded responses until it comes back.
#[derive(Debug, Clone, Copy)]
pub struct ServeStrategy;

impl CommandStrategy for ServeStrategy {
    type Input = ServeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut config = Config::load()?;
        input.apply(&mut config);

        let service = open_service(&config).await?;

        let addr = Server::parse_addr(&config.server.host, config.server.port)?;
        println!("ValidaRFC API on http://{addr}  (Ctrl+C to stop)");

        Server::new(addr, Arc::new(service)).start().await?;
        Ok(())
    }
}

/// Connect the store and build the service. A database that cannot be
/// reached only degrades recording and history.
async fn open_service(config: &Config) -> anyhow::Result<ValidationService> {
    let store =
        ValidationStore::connect(&config.database.url, &super::store_options(&config.database))
            .await?;
    if let Err(e) = store.ensure_schema().await {
        warn!("Could not prepare validations table, history and recording are degraded: {e}");
    }

    info!(
        "Validation format: {}, max batch: {}",
        config.validation.format, config.validation.max_batch
    );
    Ok(ValidationService::new(Arc::new(store))
        .with_format(config.validation.format)
        .with_page_limits(config.history.limits())
        .with_max_batch(config.validation.max_batch))
}
