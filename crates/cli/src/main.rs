use anyhow::Context;
use clap::Parser;
use dnsbl_tracker_api::AppState;
use dnsbl_tracker_domain::{CliOverrides, Config};
use std::net::SocketAddr;
use tracing::{error, info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "dnsbl-tracker")]
#[command(version)]
#[command(about = "dnsbl-tracker - queue IPv4 addresses for DNS blocklist lookups and store the results")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", env = "DNSBL_TRACKER_CONFIG")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long, env = "PORT")]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Lookup queue length
    #[arg(short = 'q', long)]
    queue_length: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
        queue_length: cli.queue_length,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config)?;

    info!("Starting dnsbl-tracker v{}", env!("CARGO_PKG_VERSION"));
    match cli.config.clone().or_else(Config::get_config_path) {
        Some(path) => info!(path = %path, "Loaded configuration file"),
        None => info!("No configuration file found, using defaults"),
    }

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool.clone());
    let lookup = di::build_lookup(&config)?;
    let use_cases = di::UseCases::new(&config, &repos, lookup);

    let app_state = AppState {
        enqueue: use_cases.enqueue.clone(),
        get_ip_details: use_cases.get_ip_details.clone(),
        queue: use_cases.queue.clone(),
    };

    let shutdown = server::create_shutdown_token();

    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.web_port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid web server address {}:{}",
                config.server.bind_address, config.server.web_port
            )
        })?;

    let served = server::start_web_server(web_addr, app_state, shutdown).await;
    if let Err(e) = &served {
        error!(error = %e, "Web server error");
    }

    if use_cases.queue.stop().await {
        info!("Lookup queue stopped cleanly");
    } else {
        warn!("Lookup queue did not stop within the timeout");
    }

    pool.close().await;

    info!("Server shutdown complete");
    served
}
