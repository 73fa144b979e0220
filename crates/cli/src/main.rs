//! # topograph
//!
//! Resilient serving-graph cache for query routers: answers keyspace,
//! shard and endpoint lookups from a TTL cache in front of the topology
//! directory, and keeps answering when the directory is down.

mod bootstrap;
mod server;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use topograph_api::{create_api_routes, AppState};
use topograph_application::TopologyClient;
use topograph_domain::CliOverrides;
use topograph_infrastructure::{FileDirectoryClient, ResilientTopology};

#[derive(Parser)]
#[command(name = "topograph")]
#[command(version)]
#[command(about = "Resilient serving-graph cache for query routers")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// HTTP status/API port
    #[arg(long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(long)]
    bind: Option<String>,

    /// How long to use cached topology entries, in milliseconds
    #[arg(long)]
    srv_topo_cache_ttl_ms: Option<u64>,

    /// Path to the JSON directory snapshot served as the upstream
    #[arg(long)]
    directory_file: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind,
        cache_ttl_ms: cli.srv_topo_cache_ttl_ms,
        directory_file: cli.directory_file,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;

    bootstrap::init_logging(&config);
    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        cache_ttl_ms = config.topology.cache_ttl_ms,
        "Configuration loaded"
    );

    let directory_file = config.topology.directory_file.clone().ok_or_else(|| {
        anyhow::anyhow!("topology.directory_file must be set (or pass --directory-file)")
    })?;
    let upstream: Arc<dyn TopologyClient> = Arc::new(FileDirectoryClient::new(directory_file));

    let topology = Arc::new(ResilientTopology::new(
        upstream,
        Duration::from_millis(config.topology.cache_ttl_ms),
        config.topology.counters_name.clone(),
    ));

    let app = create_api_routes(AppState { topology });
    server::start_web_server(&config.server.bind_address, config.server.web_port, app).await
}
