use clap::Parser;
use nsgate_api::AppState;
use nsgate_application::use_cases::CheckHostUseCase;
use nsgate_domain::{CliOverrides, Config};
use nsgate_infrastructure::UdpNsResolver;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "nsgate")]
#[command(version = "0.1.0")]
#[command(about = "nsgate - HTTP endpoint validating domain delegation against allow-listed nameservers")]
struct Cli {
    /// Web server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
    };

    // A missing allow-list is fatal before the listener binds.
    let config = Config::from_env(cli_overrides)?;

    // Initialize logging
    bootstrap::init_logging(&config);

    info!("Starting nsgate v{}", env!("CARGO_PKG_VERSION"));
    for entry in config.allow_list.iter() {
        info!(nameserver = %entry, "Allowed nameserver");
    }

    // Dependency wiring
    let resolver = Arc::new(UdpNsResolver::from_resolvers(
        &config.dns.resolvers,
        Duration::from_secs(config.dns.query_timeout),
    )?);
    info!(resolver = %resolver.server_addr(), "Using upstream resolver");

    let check_host = Arc::new(CheckHostUseCase::new(
        resolver,
        Arc::new(config.allow_list.clone()),
    ));

    let app_state = AppState { check_host };

    // Start web server (blocking)
    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.port)
        .parse()
        .expect("Invalid address");

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
