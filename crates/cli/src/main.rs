use clap::Parser;
use ferrous_ptr_domain::{LookupConfig, TransportProtocol};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::BufReader;
use tracing::{debug, info};

mod bootstrap;
mod di;

#[derive(Parser, Debug)]
#[command(name = "ferrous-ptr")]
#[command(version)]
#[command(about = "Bulk reverse DNS (PTR) lookups for addresses read from stdin")]
struct Cli {
    /// How many concurrent lookup workers to run
    #[arg(short = 't', long, default_value_t = 8)]
    threads: usize,

    /// IP of the DNS resolver to use for lookups
    #[arg(short = 'r', long)]
    resolver: Option<String>,

    /// IPs of the DNS resolvers to use for lookups, comma delimited
    #[arg(short = 'l', long)]
    resolvers: Option<String>,

    /// Protocol to use for lookups (tcp or udp)
    #[arg(short = 'P', long, default_value = "udp")]
    protocol: TransportProtocol,

    /// Port to query the specified DNS resolver on
    #[arg(short = 'p', long, default_value_t = 53)]
    port: u16,

    /// Output only domains
    #[arg(short = 'd', long)]
    domain: bool,

    /// Per-query timeout in seconds for custom resolvers
    #[arg(long, value_name = "SECS", default_value_t = 5)]
    timeout: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn lookup_config(&self) -> LookupConfig {
        LookupConfig {
            threads: self.threads,
            resolver: self.resolver.clone(),
            resolvers: self.resolvers.clone(),
            protocol: self.protocol,
            port: self.port,
            domain_only: self.domain,
            query_timeout: Duration::from_secs(self.timeout),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    bootstrap::init_logging(&cli.log_level);

    let config = cli.lookup_config();
    config.validate()?;

    info!(
        threads = config.threads,
        protocol = %config.protocol,
        port = config.port,
        "Starting ferrous-ptr v{}",
        env!("CARGO_PKG_VERSION")
    );

    let use_case = di::build_lookup_use_case(Arc::new(config));
    let input = BufReader::new(tokio::io::stdin());

    let summary = use_case.execute(input).await?;

    debug!(items = summary.items, lines = summary.lines, "Done");
    Ok(())
}
