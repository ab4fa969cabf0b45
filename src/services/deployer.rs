//! Contract deployment sequence.
//!
//! Orchestrates the lifecycle the deploy binary and the test fixtures share:
//! on development networks the mock aggregator deploys first and is recorded
//! in the registry, the price feed resolves, then FundMe deploys with the
//! resolved address as its constructor argument. Deployments wait for the
//! network's required confirmations before being treated as final.

use alloy::primitives::U256;
use log::info;

use crate::{
    constants::{
        FUND_ME_CONTRACT, MOCK_AGGREGATOR_CONTRACT, MOCK_AGGREGATOR_DECIMALS,
        MOCK_AGGREGATOR_INITIAL_ANSWER,
    },
    models::{CallArg, DeploymentError, DeploymentRecord, Networks},
    repositories::DeploymentRegistry,
    services::{resolve_price_feed_address, LedgerClient},
};

/// Deploys FundMe on the given network, recording every deployment in
/// `registry`, and returns the FundMe record.
///
/// The first unlocked ledger account acts as the deployer and becomes the
/// contract owner.
pub async fn deploy_contracts<L: LedgerClient + ?Sized>(
    ledger: &L,
    networks: &Networks,
    chain_id: u64,
    registry: &DeploymentRegistry,
) -> Result<DeploymentRecord, DeploymentError> {
    let network = networks.by_chain_id(chain_id)?;
    let confirmations = network.required_confirmations;

    let accounts = ledger.get_accounts().await?;
    let deployer = accounts
        .first()
        .copied()
        .ok_or(DeploymentError::NoAccounts)?;

    if network.is_development && registry.get(MOCK_AGGREGATOR_CONTRACT).is_none() {
        info!(
            "Development network '{}': deploying {}",
            network.network, MOCK_AGGREGATOR_CONTRACT
        );
        let mock = ledger
            .deploy_contract(
                MOCK_AGGREGATOR_CONTRACT,
                vec![
                    CallArg::Uint(U256::from(MOCK_AGGREGATOR_DECIMALS)),
                    CallArg::Uint(U256::from(MOCK_AGGREGATOR_INITIAL_ANSWER)),
                ],
                deployer,
                confirmations,
            )
            .await?;
        info!("{} deployed at {}", MOCK_AGGREGATOR_CONTRACT, mock.address);
        registry.record(mock);
    }

    let price_feed =
        resolve_price_feed_address(networks, chain_id, network.is_development, registry)?;

    let record = ledger
        .deploy_contract(
            FUND_ME_CONTRACT,
            vec![CallArg::Address(price_feed)],
            deployer,
            confirmations,
        )
        .await?;
    info!(
        "{} deployed at {} with price feed {} ({} confirmations)",
        FUND_ME_CONTRACT, record.address, price_feed, confirmations
    );
    registry.record(record.clone());

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::NetworkConfig,
        services::{InMemoryLedger, LedgerError, MockLedgerClient},
    };
    use alloy::primitives::Address;

    fn development_networks() -> Networks {
        Networks::new(vec![NetworkConfig {
            network: "localhost".to_string(),
            chain_id: 31337,
            price_feed: None,
            rpc_urls: vec!["http://127.0.0.1:8545".to_string()],
            is_development: true,
            required_confirmations: 1,
        }])
    }

    #[tokio::test]
    async fn test_deploys_mock_before_fund_me_on_development_network() {
        let ledger = InMemoryLedger::new();
        let registry = DeploymentRegistry::new();

        let record = deploy_contracts(&ledger, &development_networks(), 31337, &registry)
            .await
            .unwrap();

        let mock = registry.get(MOCK_AGGREGATOR_CONTRACT).unwrap();
        let fund_me = registry.get(FUND_ME_CONTRACT).unwrap();
        assert_eq!(fund_me.address, record.address);
        assert!(mock.transaction.block_number < fund_me.transaction.block_number);
    }

    #[tokio::test]
    async fn test_reuses_already_registered_mock() {
        let ledger = InMemoryLedger::new();
        let registry = DeploymentRegistry::new();

        deploy_contracts(&ledger, &development_networks(), 31337, &registry)
            .await
            .unwrap();
        let first_mock = registry.get(MOCK_AGGREGATOR_CONTRACT).unwrap();

        deploy_contracts(&ledger, &development_networks(), 31337, &registry)
            .await
            .unwrap();
        let second_mock = registry.get(MOCK_AGGREGATOR_CONTRACT).unwrap();
        assert_eq!(first_mock.address, second_mock.address);
    }

    #[tokio::test]
    async fn test_unknown_chain_id() {
        let ledger = InMemoryLedger::new();
        let registry = DeploymentRegistry::new();

        let result = deploy_contracts(&ledger, &development_networks(), 1, &registry).await;
        assert!(matches!(result, Err(DeploymentError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_no_accounts() {
        let mut ledger = MockLedgerClient::new();
        ledger
            .expect_get_accounts()
            .returning(|| Box::pin(async { Ok(vec![]) }));

        let registry = DeploymentRegistry::new();
        let result = deploy_contracts(&ledger, &development_networks(), 31337, &registry).await;
        assert!(matches!(result, Err(DeploymentError::NoAccounts)));
    }

    #[tokio::test]
    async fn test_creation_revert_is_classified() {
        let mut ledger = MockLedgerClient::new();
        ledger
            .expect_get_accounts()
            .returning(|| Box::pin(async { Ok(vec![Address::with_last_byte(1)]) }));
        ledger.expect_deploy_contract().returning(|_, _, _, _| {
            Box::pin(async {
                Err(LedgerError::Reverted {
                    reason: "constructor failed".to_string(),
                })
            })
        });

        let registry = DeploymentRegistry::new();
        let result = deploy_contracts(&ledger, &development_networks(), 31337, &registry).await;
        assert!(matches!(result, Err(DeploymentError::Reverted(_))));
    }
}
