use clap::Parser;
use std::net::IpAddr;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use zorori_application::ports::DnsResolver;
use zorori_domain::config::ResolveMode;
use zorori_domain::{CliOverrides, QueryType};
use zorori_infrastructure::dns::create_resolver;

mod bootstrap;

const DEFAULT_A_NAME: &str = "www.jprs.co.jp";
const DEFAULT_SVCB_NAME: &str = "_dns.resolver.arpa";

#[derive(Parser)]
#[command(name = "zorori")]
#[command(version)]
#[command(about = "zorori - DNS client over DoH and UDP, stub or iterative")]
struct Cli {
    /// Name to resolve
    domain: Option<String>,

    /// Resolve mode (doh, udp)
    #[arg(long)]
    mode: Option<ResolveMode>,

    /// In udp mode, forward to the full resolver instead of iterating
    #[arg(long, value_name = "BOOL", action = clap::ArgAction::Set)]
    stub: Option<bool>,

    /// Address of the full resolver used in stub mode
    #[arg(long, value_name = "IP")]
    full_resolver: Option<IpAddr>,

    /// DoH endpoint URL
    #[arg(long, value_name = "URL")]
    doh: Option<String>,

    /// Query type (A, SVCB)
    #[arg(long = "type", value_name = "TYPE", default_value = "A")]
    query_type: QueryType,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Seed for transaction IDs
    #[arg(long)]
    seed: Option<u64>,

    /// Per-query timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let cli_overrides = CliOverrides {
        mode: cli.mode,
        stub: cli.stub,
        full_resolver: cli.full_resolver,
        doh_server: cli.doh.clone(),
        query_timeout_ms: cli.timeout_ms,
        query_id_seed: cli.seed,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config.logging)?;

    debug!(
        mode = %config.resolver.mode,
        stub = config.resolver.stub,
        "Configuration loaded"
    );

    let resolver: Arc<dyn DnsResolver> = create_resolver(&config.resolver)?;

    match cli.query_type {
        QueryType::A => {
            let name = cli.domain.as_deref().unwrap_or(DEFAULT_A_NAME);
            info!(name = %name, resolver = resolver.name(), "Resolving A");
            let result = resolver.a_resolve(name).await?;
            Ok(format!("A: {}", result.ip()))
        }
        QueryType::SVCB => {
            let name = cli.domain.as_deref().unwrap_or(DEFAULT_SVCB_NAME);
            info!(name = %name, resolver = resolver.name(), "Resolving SVCB");
            let result = resolver.svcb_resolve(name).await?;
            Ok(format!("SVCB: {}", result))
        }
        other => anyhow::bail!("unknown query type: {}", other),
    }
}
