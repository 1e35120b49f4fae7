use chrono::Utc;
use clap::Parser;
use cli::Args;
use config::NetworksConfig;
use deployment::{run_batch, BatchParams, EnvSigningKey, ForgeDeployer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_error::ErrorLayer;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub mod ethers_utils;
pub mod forge_utils;
pub mod serde_utils;

mod cli;
mod config;
mod error;
mod identifiers;
mod report;
mod types;

mod deployment;

mod interactive;

async fn start() -> eyre::Result<()> {
    let args = Args::parse();

    println!("Welcome to token-spray!");

    let config = NetworksConfig::load(&args.networks).await?;
    let network = interactive::select_target_network(
        &config,
        &args.network_type,
        args.network.as_deref(),
    )?;

    let count = interactive::resolve_deploy_count(args.deploy_count.as_deref())?;
    println!("Will deploy {count} tokens sequentially.");

    let supply_range = interactive::resolve_supply_range(
        args.min_supply.as_deref(),
        args.max_supply.as_deref(),
    )?;
    println!("Supply will be random between {supply_range}.");

    let signing_key = EnvSigningKey::new(args.private_key);

    if let Err(err) = ethers_utils::preflight(network, &signing_key).await {
        tracing::warn!("Preflight check failed, deploying anyway: {err:#}");
    }

    let deployer =
        ForgeDeployer::new(args.contracts_dir, args.contract, signing_key);

    let params = BatchParams {
        count,
        supply_range,
        delay: args.delay,
    };

    println!("\nStarting deployments...\n");

    let mut rng = StdRng::from_entropy();
    let outcomes = run_batch(&deployer, &mut rng, network, &params).await;

    report::print_summary(&outcomes);

    match report::write_summary(&args.summary_dir, &outcomes, Utc::now()).await
    {
        Ok(path) => println!("\nSummary saved to {}", path.display()),
        Err(err) => tracing::error!("{err}"),
    }

    println!("\nDone.");

    Ok(())
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    dotenv::dotenv().ok();

    let indicatif_layer = IndicatifLayer::new();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .with_filter(filter),
        )
        .with(indicatif_layer)
        .with(ErrorLayer::default())
        .init();

    match start().await {
        Ok(()) => Ok(()),
        Err(err) => {
            tracing::error!("Fatal error: {:?}", err);
            std::process::exit(1)
        }
    }
}
