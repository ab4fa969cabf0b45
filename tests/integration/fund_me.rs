//! Funding and withdrawal flow tests.
//!
//! Exercises the observed contract state machine: Empty → Funded →
//! Withdrawn. Failed operations must leave every observable (contract
//! balance, funder sequence, per-funder amounts) unchanged.

use alloy::primitives::U256;
use fundme_deployer::{
    constants::MINIMUM_USD,
    services::{FundMe, FundMeError, LedgerClient},
    utils::ether,
};

use crate::common::deploy_fixture;

/// Value each funder sends, matching one whole unit of native currency.
fn send_value() -> U256 {
    ether(1)
}

/// Smallest value that converts to exactly the minimum USD threshold at the
/// mock feed's $2000 answer: 0.025 ether.
fn threshold_value() -> U256 {
    ether(1) / U256::from(40u64)
}

#[tokio::test]
async fn test_fund_fails_without_enough_value() {
    let fixture = deploy_fixture().await;
    let fund_me = FundMe::attach(&fixture.ledger, &fixture.registry).unwrap();
    let funder = fixture.accounts[1];

    let result = fund_me.fund(funder, U256::ZERO).await;
    assert!(matches!(result, Err(FundMeError::InsufficientValue)));

    // State unchanged: nothing recorded, nothing transferred.
    assert_eq!(fund_me.balance().await.unwrap(), U256::ZERO);
    assert_eq!(fund_me.amount_funded(funder).await.unwrap(), U256::ZERO);
    assert!(fund_me.funder(0).await.is_err());
}

#[tokio::test]
async fn test_fund_threshold_boundary() {
    let fixture = deploy_fixture().await;
    let fund_me = FundMe::attach(&fixture.ledger, &fixture.registry).unwrap();
    let funder = fixture.accounts[1];

    let below = threshold_value() - U256::from(1u64);
    let result = fund_me.fund(funder, below).await;
    assert!(matches!(result, Err(FundMeError::InsufficientValue)));

    fund_me.fund(funder, threshold_value()).await.unwrap();
    assert_eq!(fund_me.balance().await.unwrap(), threshold_value());
}

#[tokio::test]
async fn test_fund_updates_amount_funded() {
    let fixture = deploy_fixture().await;
    let fund_me = FundMe::attach(&fixture.ledger, &fixture.registry).unwrap();
    let funder = fixture.accounts[1];

    fund_me.fund(funder, send_value()).await.unwrap();
    assert_eq!(fund_me.amount_funded(funder).await.unwrap(), send_value());

    // Amounts accumulate across repeated funding.
    fund_me.fund(funder, send_value()).await.unwrap();
    assert_eq!(
        fund_me.amount_funded(funder).await.unwrap(),
        send_value() * U256::from(2u64)
    );
}

#[tokio::test]
async fn test_fund_appends_funder_to_sequence_once() {
    let fixture = deploy_fixture().await;
    let fund_me = FundMe::attach(&fixture.ledger, &fixture.registry).unwrap();
    let funder = fixture.accounts[1];

    fund_me.fund(funder, send_value()).await.unwrap();
    fund_me.fund(funder, send_value()).await.unwrap();

    assert_eq!(fund_me.funder(0).await.unwrap(), funder);
    // Repeat funding must not duplicate the sequence entry.
    assert!(fund_me.funder(1).await.is_err());
}

#[tokio::test]
async fn test_withdraw_from_a_single_funder() {
    let fixture = deploy_fixture().await;
    let fund_me = FundMe::attach(&fixture.ledger, &fixture.registry).unwrap();
    let owner = fixture.accounts[0];

    fund_me.fund(owner, send_value()).await.unwrap();

    let starting_contract_balance = fund_me.balance().await.unwrap();
    let starting_owner_balance = fixture.ledger.get_balance(owner).await.unwrap();

    fund_me.withdraw(owner).await.unwrap();

    let ending_owner_balance = fixture.ledger.get_balance(owner).await.unwrap();
    assert_eq!(fund_me.balance().await.unwrap(), U256::ZERO);
    assert_eq!(
        ending_owner_balance,
        starting_owner_balance + starting_contract_balance
    );
}

#[tokio::test]
async fn test_withdraw_with_multiple_funders() {
    let fixture = deploy_fixture().await;
    let fund_me = FundMe::attach(&fixture.ledger, &fixture.registry).unwrap();
    let owner = fixture.accounts[0];
    let funders = &fixture.accounts[1..6];

    for funder in funders {
        fund_me.fund(*funder, send_value()).await.unwrap();
    }
    assert_eq!(
        fund_me.balance().await.unwrap(),
        send_value() * U256::from(funders.len() as u64)
    );

    let starting_contract_balance = fund_me.balance().await.unwrap();
    let starting_owner_balance = fixture.ledger.get_balance(owner).await.unwrap();

    fund_me.withdraw(owner).await.unwrap();

    assert_eq!(fund_me.balance().await.unwrap(), U256::ZERO);
    assert_eq!(
        fixture.ledger.get_balance(owner).await.unwrap(),
        starting_owner_balance + starting_contract_balance
    );

    // The funder ledger resets completely.
    assert!(fund_me.funder(0).await.is_err());
    for funder in funders {
        assert_eq!(fund_me.amount_funded(*funder).await.unwrap(), U256::ZERO);
    }
}

#[tokio::test]
async fn test_only_owner_can_withdraw() {
    let fixture = deploy_fixture().await;
    let fund_me = FundMe::attach(&fixture.ledger, &fixture.registry).unwrap();
    let funder = fixture.accounts[1];
    let attacker = fixture.accounts[2];

    fund_me.fund(funder, send_value()).await.unwrap();

    let result = fund_me.withdraw(attacker).await;
    assert!(matches!(result, Err(FundMeError::Permission)));

    // Prior state survives the failed attempt.
    assert_eq!(fund_me.balance().await.unwrap(), send_value());
    assert_eq!(fund_me.funder(0).await.unwrap(), funder);
    assert_eq!(fund_me.amount_funded(funder).await.unwrap(), send_value());
}

#[tokio::test]
async fn test_cheaper_withdraw_resets_state() {
    let fixture = deploy_fixture().await;
    let fund_me = FundMe::attach(&fixture.ledger, &fixture.registry).unwrap();
    let owner = fixture.accounts[0];
    let funders = &fixture.accounts[1..6];

    for funder in funders {
        fund_me.fund(*funder, send_value()).await.unwrap();
    }

    let starting_contract_balance = fund_me.balance().await.unwrap();
    let starting_owner_balance = fixture.ledger.get_balance(owner).await.unwrap();

    fund_me.cheaper_withdraw(owner).await.unwrap();

    assert_eq!(fund_me.balance().await.unwrap(), U256::ZERO);
    assert_eq!(
        fixture.ledger.get_balance(owner).await.unwrap(),
        starting_owner_balance + starting_contract_balance
    );
    assert!(fund_me.funder(0).await.is_err());
    for funder in funders {
        assert_eq!(fund_me.amount_funded(*funder).await.unwrap(), U256::ZERO);
    }
}

#[tokio::test]
async fn test_cheaper_withdraw_is_owner_only() {
    let fixture = deploy_fixture().await;
    let fund_me = FundMe::attach(&fixture.ledger, &fixture.registry).unwrap();

    let result = fund_me.cheaper_withdraw(fixture.accounts[3]).await;
    assert!(matches!(result, Err(FundMeError::Permission)));
}

#[tokio::test]
async fn test_minimum_usd_matches_contract_interface() {
    let fixture = deploy_fixture().await;
    let fund_me = FundMe::attach(&fixture.ledger, &fixture.registry).unwrap();

    assert_eq!(
        fund_me.minimum_usd().await.unwrap(),
        U256::from(MINIMUM_USD)
    );
}
