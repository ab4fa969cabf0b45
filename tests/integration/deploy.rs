//! Deployment sequence and configuration resolution tests.

use alloy::primitives::Address;
use fundme_deployer::{
    constants::{FUND_ME_CONTRACT, MOCK_AGGREGATOR_CONTRACT},
    models::{NetworkConfig, Networks},
    repositories::DeploymentRegistry,
    services::{resolve_price_feed_address, FundMe},
};

use crate::common::deploy_fixture;

fn live_networks() -> Networks {
    Networks::new(vec![
        NetworkConfig {
            network: "sepolia".to_string(),
            chain_id: 11155111,
            price_feed: Some(Address::with_last_byte(0x11)),
            rpc_urls: vec!["https://rpc.sepolia.org".to_string()],
            is_development: false,
            required_confirmations: 6,
        },
        NetworkConfig {
            network: "mainnet".to_string(),
            chain_id: 1,
            price_feed: Some(Address::with_last_byte(0x22)),
            rpc_urls: vec!["https://eth.llamarpc.com".to_string()],
            is_development: false,
            required_confirmations: 6,
        },
    ])
}

#[tokio::test]
async fn test_fixture_registers_mock_before_fund_me() {
    let fixture = deploy_fixture().await;

    let mock = fixture.registry.get(MOCK_AGGREGATOR_CONTRACT).unwrap();
    let fund_me = fixture.registry.get(FUND_ME_CONTRACT).unwrap();

    assert_eq!(fund_me.address, fixture.fund_me.address);
    assert!(mock.transaction.block_number < fund_me.transaction.block_number);
}

#[tokio::test]
async fn test_constructor_receives_mock_price_feed() {
    let fixture = deploy_fixture().await;
    let fund_me = FundMe::attach(&fixture.ledger, &fixture.registry).unwrap();

    let mock = fixture.registry.get(MOCK_AGGREGATOR_CONTRACT).unwrap();
    assert_eq!(fund_me.price_feed().await.unwrap(), mock.address);
}

#[tokio::test]
async fn test_deployer_account_becomes_owner() {
    let fixture = deploy_fixture().await;
    let fund_me = FundMe::attach(&fixture.ledger, &fixture.registry).unwrap();

    assert_eq!(fund_me.owner().await.unwrap(), fixture.accounts[0]);
}

#[test]
fn test_every_configured_network_resolves_deterministically() {
    let networks = live_networks();
    let registry = DeploymentRegistry::new();

    for network in networks.iter() {
        let first = resolve_price_feed_address(
            &networks,
            network.chain_id,
            network.is_development,
            &registry,
        )
        .unwrap();
        let second = resolve_price_feed_address(
            &networks,
            network.chain_id,
            network.is_development,
            &registry,
        )
        .unwrap();

        assert_ne!(first, Address::ZERO);
        assert_eq!(first, second);
        assert_eq!(Some(first), network.price_feed);
    }
}

#[tokio::test]
async fn test_registry_snapshot_round_trips_through_file() {
    let fixture = deploy_fixture().await;

    let dir = tempfile::TempDir::new().unwrap();
    let path = DeploymentRegistry::file_path(dir.path().to_str().unwrap(), "localhost");
    fixture.registry.save(&path).unwrap();

    let loaded = DeploymentRegistry::load(&path).unwrap();
    assert_eq!(
        loaded.get(FUND_ME_CONTRACT).unwrap().address,
        fixture.fund_me.address
    );
    assert_eq!(
        loaded.get(MOCK_AGGREGATOR_CONTRACT).unwrap().address,
        fixture.registry.get(MOCK_AGGREGATOR_CONTRACT).unwrap().address
    );

    // A handle attached through the reloaded registry points at the same
    // contract, which is how the withdraw binary finds it.
    let fund_me = FundMe::attach(&fixture.ledger, &loaded).unwrap();
    assert_eq!(fund_me.address(), fixture.fund_me.address);
}

#[tokio::test]
async fn test_deployment_waits_for_requested_confirmations() {
    let fixture = deploy_fixture().await;
    assert_eq!(fixture.fund_me.transaction.confirmations, 1);
}
