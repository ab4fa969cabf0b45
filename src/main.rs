//! # FundMe Deployer
//!
//! Deploys the FundMe contract to the configured network. On development
//! networks a mock price feed aggregator is deployed first; on live networks
//! the statically configured feed address is used. Deployment records are
//! persisted per network so the withdraw binary can locate the contract.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin deploy
//! ```

use color_eyre::{eyre::eyre, eyre::WrapErr, Result};
use dotenvy::dotenv;
use log::info;

use fundme_deployer::{
    config::{self, HarnessConfig},
    logging::setup_logging,
    models::Networks,
    repositories::DeploymentRegistry,
    services::{deploy_contracts, HttpLedger},
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install().wrap_err("Failed to initialize error reporting")?;

    dotenv().ok();
    setup_logging();

    let harness = HarnessConfig::from_env();
    let config_file = config::load_config(&harness.config_file_path)
        .wrap_err("Failed to load config file")?;
    let networks = Networks::try_from(&config_file)?;
    let network = networks.by_chain_id(harness.chain_id)?.clone();

    let rpc_url = harness
        .rpc_url
        .clone()
        .or_else(|| network.rpc_urls.first().cloned())
        .ok_or_else(|| eyre!("No RPC URL available for network '{}'", network.network))?;

    info!(
        "Deploying to '{}' (chain id {}) via {}",
        network.network, network.chain_id, rpc_url
    );
    let ledger = HttpLedger::new(&rpc_url, &harness.artifacts_dir, harness.rpc_timeout_seconds)?;

    let registry = DeploymentRegistry::new();
    let record = deploy_contracts(&ledger, &networks, harness.chain_id, &registry).await?;

    let path = DeploymentRegistry::file_path(&harness.deployments_dir, &network.network);
    registry.save(&path)?;
    info!(
        "Deployment recorded: {} at {} (block {}, deployments file {})",
        record.name,
        record.address,
        record.transaction.block_number,
        path.display()
    );

    Ok(())
}
