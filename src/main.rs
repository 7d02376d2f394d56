//! Carrier Bridge CLI
//!
//! Quotes a shipment described in a JSON file against one carrier, or every
//! carrier with credentials in the environment, and prints the results as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use carrier_bridge::carriers::{CarrierCredentials, CarrierService, ServiceFactory};
use carrier_bridge::domain::Shipment;
use carrier_bridge::Settings;

#[derive(Debug, Parser)]
#[command(name = "carrier-bridge", version, about = "Quote shipments across carriers")]
struct Cli {
    /// Carrier code; all configured carriers when omitted
    #[arg(long)]
    carrier: Option<String>,

    /// Shipment JSON file
    #[arg(long, required_unless_present = "list_carriers")]
    shipment: Option<PathBuf>,

    /// Fetch transit timings instead of rates
    #[arg(long)]
    timings: bool,

    /// Print the configured carriers and their shipping methods
    #[arg(long)]
    list_carriers: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("carrier_bridge=info")),
        )
        .json()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load().context("Failed to load configuration")?;

    let services: Vec<Box<dyn CarrierService>> = match &cli.carrier {
        Some(code) => vec![ServiceFactory::create(code, &CarrierCredentials::from_env(code), &settings)
            .with_context(|| format!("Failed to configure carrier {}", code))?],
        None => ServiceFactory::create_all_from_env(&settings),
    };

    if cli.list_carriers {
        let carriers: Vec<_> = services.iter().map(|s| s.carrier()).collect();
        println!("{}", serde_json::to_string_pretty(&carriers)?);
        return Ok(());
    }

    let path = cli.shipment.context("--shipment is required")?;
    let text = std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let shipment: Shipment = serde_json::from_str(&text).context("Invalid shipment JSON")?;

    info!(carriers = services.len(), timings = cli.timings, "Quoting shipment");

    let mut output = serde_json::Map::new();
    for service in &services {
        let result = if cli.timings {
            service.timings(&shipment).await.map(|r| serde_json::to_value(r.data))
        } else {
            service.rate_estimates(&shipment).await.map(|r| serde_json::to_value(r.data))
        };

        let value = match result {
            Ok(value) => value?,
            Err(failure) => {
                warn!(carrier = service.code(), error = %failure, "Carrier call failed");
                serde_json::json!({ "error": failure.error.message() })
            }
        };
        output.insert(service.code().to_string(), value);
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
