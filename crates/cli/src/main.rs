use clap::Parser;
use radix_canary_api::dto::MetricLabels;
use radix_canary_api::{AppState, VERSION};
use radix_canary_domain::CliOverrides;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "radix-canary")]
#[command(version)]
#[command(about = "Radix Canary - connectivity diagnostics for Radix clusters")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", env = "RADIX_CANARY_CONFIG")]
    config: Option<String>,

    /// Listening port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Human-readable console logs instead of JSON
    #[arg(long, value_name = "BOOL")]
    pretty_log: Option<bool>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
        pretty_log: cli.pretty_log,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging)?;

    info!(version = VERSION, "Starting radix-canary");

    let adapters = di::Adapters::new(&config)?;
    let use_cases = di::UseCases::new(&config, &adapters);

    let app_state = AppState {
        probes: use_cases.probes,
        start_job_batch: use_cases.start_job_batch,
        metrics: adapters.metrics.clone(),
        metric_labels: Arc::new(MetricLabels::current(VERSION)),
    };

    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid listen address: {}", e))?;

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
