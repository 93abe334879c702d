use clap::Parser;
use sinkhole_dns_domain::CliOverrides;
use sinkhole_dns_infrastructure::dns::start_dns_server;
use std::net::Ipv4Addr;
use tracing::info;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "sinkhole-dns")]
#[command(version = "0.1.0")]
#[command(about = "Sinkhole DNS - Minimal DNS server answering every query with a fixed address")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// IPv4 address placed in every fabricated answer
    #[arg(short = 'a', long)]
    answer: Option<Ipv4Addr>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        response_address: cli.answer,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    // Initialize logging
    bootstrap::init_logging(&config);

    info!("Starting Sinkhole DNS Server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        answer = %config.response.address,
        ttl = config.response.ttl,
        "Every query will be answered with the fixed address"
    );

    // Dependency Injection - Build all dependencies
    let services = di::DnsServices::new(&config);

    // Start DNS server (blocking)
    let bind_addr = format!("{}:{}", config.server.bind_address, config.server.port);
    start_dns_server(&bind_addr, services.handler).await?;

    info!("Server shutdown complete");
    Ok(())
}
