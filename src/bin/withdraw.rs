//! # FundMe Withdrawal
//!
//! Invokes the FundMe withdrawal entry point as the first unlocked ledger
//! account, locating the contract through the network's deployments file.
//! Takes no arguments; exits 0 on success and 1 on any failure, printing the
//! underlying cause.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin withdraw
//! ```

use color_eyre::{eyre::eyre, eyre::WrapErr, Result};
use dotenvy::dotenv;
use log::info;

use fundme_deployer::{
    config::{self, HarnessConfig},
    logging::setup_logging,
    models::Networks,
    repositories::DeploymentRegistry,
    services::{FundMe, HttpLedger, LedgerClient},
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
    let ledger = HttpLedger::new(&rpc_url, &harness.artifacts_dir, harness.rpc_timeout_seconds)?;

    let path = DeploymentRegistry::file_path(&harness.deployments_dir, &network.network);
    let registry = DeploymentRegistry::load(&path)
        .wrap_err_with(|| format!("No deployments recorded for '{}'", network.network))?;
    let fund_me = FundMe::attach(&ledger, &registry)?;

    let accounts = ledger.get_accounts().await?;
    let caller = accounts
        .first()
        .copied()
        .ok_or_else(|| eyre!("Ledger exposes no unlocked accounts"))?;

    info!("Withdrawing from {} as {}", fund_me.address(), caller);
    let outcome = fund_me.withdraw(caller).await?;
    info!("Withdrawal confirmed in block {}", outcome.block_number);

    Ok(())
}
