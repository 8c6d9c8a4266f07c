use std::env;
use std::path::PathBuf;

use item_gateway::config::loader::load_config;
use item_gateway::config::GatewayConfig;
use item_gateway::lifecycle::{Shutdown, Supervisor};
use item_gateway::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config path: first CLI argument, then GATEWAY_CONFIG, else defaults.
    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| env::var_os("GATEWAY_CONFIG").map(PathBuf::from));

    let config = match config_path {
        Some(path) => load_config(&path)?,
        None => GatewayConfig::default(),
    };

    observability::logging::init(&config.observability.log_level);

    tracing::info!(
        host = %config.listener.host,
        rest_port = config.listener.rest_port,
        rpc_port = config.listener.rpc_port,
        upstream = %config.upstream.base_url,
        "item-gateway v0.1.0 starting"
    );

    let shutdown = Shutdown::new();

    // Ctrl+C drains both listeners.
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown signal received");
            signal_shutdown.trigger();
        }
    });

    Supervisor::new(config).run(&shutdown).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
