use std::net::SocketAddr;
use std::sync::Arc;

use clap::Args;
use tracing::warn;

#[derive(Args, Debug)]
pub struct Command {
    /// Override the configured listen address (e.g. "0.0.0.0:8080")
    #[arg(long)]
    listen: Option<String>,
}

pub async fn handle(command: Command, config_path: &str) -> eyre::Result<()> {
    let config = match itrack_config::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!("no usable configuration file, falling back to defaults ({e})");
            itrack_config::Config::default_config()
        }
    };

    let tracker = itrack_core::load(&config).await?;

    let addr: SocketAddr = command
        .listen
        .unwrap_or_else(|| config.server.get_listen_address())
        .parse()
        .map_err(|e| eyre::eyre!("invalid listen address: {e}"))?;

    crate::http::serve(addr, Arc::new(tracker)).await
}
