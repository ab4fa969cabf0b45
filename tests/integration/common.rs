//! Shared fixtures for the integration suite.

use alloy::primitives::Address;
use fundme_deployer::{
    models::{DeploymentRecord, NetworkConfig, Networks},
    repositories::DeploymentRegistry,
    services::{deploy_contracts, InMemoryLedger, LedgerClient},
};

pub const DEV_CHAIN_ID: u64 = 31337;

/// Networks table with a single local development network.
pub fn dev_networks() -> Networks {
    Networks::new(vec![NetworkConfig {
        network: "localhost".to_string(),
        chain_id: DEV_CHAIN_ID,
        price_feed: None,
        rpc_urls: vec!["http://127.0.0.1:8545".to_string()],
        is_development: true,
        required_confirmations: 1,
    }])
}

pub struct Fixture {
    pub ledger: InMemoryLedger,
    pub registry: DeploymentRegistry,
    pub fund_me: DeploymentRecord,
    pub accounts: Vec<Address>,
}

/// Deploys the mock aggregator and FundMe on a fresh simulated ledger, the
/// way the deploy binary would on a development network.
pub async fn deploy_fixture() -> Fixture {
    let ledger = InMemoryLedger::new();
    let registry = DeploymentRegistry::new();

    let fund_me = deploy_contracts(&ledger, &dev_networks(), DEV_CHAIN_ID, &registry)
        .await
        .expect("fixture deployment failed");
    let accounts = ledger.get_accounts().await.expect("fixture accounts");

    Fixture {
        ledger,
        registry,
        fund_me,
        accounts,
    }
}
