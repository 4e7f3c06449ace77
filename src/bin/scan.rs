//! Scan one or more token mints and print the verdicts as JSON
//! Usage: scan [--pretty] [--metrics] <MINT>...

use mint_risk_scanner::telemetry::init_tracing;
use mint_risk_scanner::{
    AppConfig, CachedPriceSource, JupiterPriceSource, RiskScanner, RpcLedgerGateway, ScanMetrics,
};
use std::sync::Arc;

struct Args {
    mints: Vec<String>,
    pretty: bool,
    metrics: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        mints: Vec::new(),
        pretty: false,
        metrics: false,
    };

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--pretty" => args.pretty = true,
            "--metrics" => args.metrics = true,
            "--help" | "-h" => {
                println!("Usage: scan [--pretty] [--metrics] <MINT>...");
                println!("  --pretty   Pretty-print each result");
                println!("  --metrics  Print Prometheus metrics to stderr when done");
                std::process::exit(0);
            }
            flag if flag.starts_with("--") => {
                eprintln!("Unknown argument: {}", flag);
                std::process::exit(1);
            }
            mint => args.mints.push(mint.to_string()),
        }
    }

    if args.mints.is_empty() {
        eprintln!("ERROR: at least one mint address is required");
        std::process::exit(1);
    }

    args
}

/// Load and validate configuration
fn load_config() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Configuration validation failed: {}", e))?;

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = parse_args();
    let config = load_config()?;
    init_tracing(&config.logging);

    tracing::info!(rpc = %config.rpc.url, mints = args.mints.len(), "Starting scan");

    let metrics = Arc::new(ScanMetrics::new()?);
    let mut scanner = RiskScanner::new(Arc::new(RpcLedgerGateway::new(&config.rpc)))
        .with_metrics(metrics.clone());

    if config.price.enabled {
        let price_source = CachedPriceSource::new(
            JupiterPriceSource::new(&config.price)?,
            config.price.cache_capacity,
            config.price.cache_ttl_seconds,
        )?;
        scanner = scanner.with_price_source(Arc::new(price_source));
    }

    let mut failures = 0usize;
    for mint in &args.mints {
        match scanner.scan(mint).await {
            Ok(result) => {
                let json = if args.pretty {
                    serde_json::to_string_pretty(&result)?
                } else {
                    serde_json::to_string(&result)?
                };
                println!("{}", json);
            }
            Err(e) => {
                tracing::error!(mint = %mint, error = %e, "Scan rejected");
                eprintln!("{}: {}", mint, e);
                failures += 1;
            }
        }
    }

    if args.metrics {
        eprint!("{}", metrics.render()?);
    }

    if failures > 0 {
        anyhow::bail!("{} of {} scans rejected", failures, args.mints.len());
    }

    Ok(())
}
