//! In-memory ledger simulation.
//!
//! Provides a deterministic [`LedgerClient`] for the integration suite and
//! local dry runs: a fixed set of funded accounts, a block counter, and
//! simulations of the two contracts the harness touches. The simulated
//! FundMe mirrors the external contract's observable semantics (the
//! minimum-USD funding check against the aggregator answer, per-funder
//! accounting, and owner-only withdrawal that clears the funder ledger)
//! and reverts with the same reason strings the real contract uses.

use std::{collections::HashMap, sync::Mutex};

use alloy::primitives::{keccak256, Address, Bytes, U256};
use async_trait::async_trait;

use super::{LedgerClient, LedgerError};
use crate::{
    constants::{
        BELOW_MINIMUM_REVERT, FUND_ME_CONTRACT, MINIMUM_USD, MOCK_AGGREGATOR_CONTRACT,
        NOT_OWNER_REVERT,
    },
    models::{CallArg, DeploymentRecord, TransactionOutcome},
    utils::{abi, ether},
};

const ACCOUNT_COUNT: usize = 10;
const INITIAL_ACCOUNT_BALANCE_ETHER: u64 = 10_000;

/// EVM panic reason for an out-of-bounds array access.
const OUT_OF_BOUNDS_REVERT: &str = "panic: array out-of-bounds access (0x32)";

#[derive(Debug)]
struct FundMeState {
    price_feed: Address,
    owner: Address,
    funders: Vec<Address>,
    funded: HashMap<Address, U256>,
}

#[derive(Debug)]
enum ContractState {
    Aggregator { decimals: u8, answer: U256 },
    FundMe(FundMeState),
}

#[derive(Debug, Default)]
struct LedgerState {
    balances: HashMap<Address, U256>,
    contracts: HashMap<Address, ContractState>,
    block_number: u64,
    transaction_count: u64,
}

/// Deterministic in-memory ledger.
#[derive(Debug)]
pub struct InMemoryLedger {
    accounts: Vec<Address>,
    state: Mutex<LedgerState>,
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLedger {
    pub fn new() -> Self {
        let accounts: Vec<Address> = (0..ACCOUNT_COUNT).map(dev_account).collect();
        let balances = accounts
            .iter()
            .map(|account| (*account, ether(INITIAL_ACCOUNT_BALANCE_ETHER)))
            .collect();

        Self {
            accounts,
            state: Mutex::new(LedgerState {
                balances,
                ..Default::default()
            }),
        }
    }
}

/// Derives the deterministic address of an unlocked dev account.
fn dev_account(index: usize) -> Address {
    Address::from_word(keccak256(format!("dev-account-{}", index).as_bytes()))
}

fn exp10(power: u8) -> U256 {
    U256::from(10u64).pow(U256::from(power))
}

/// Converts a wei value to its 18-decimal USD equivalent using the
/// aggregator answer, the way the external contract's price converter does.
fn to_usd(value: U256, answer: U256, decimals: u8) -> U256 {
    let scaled_price = answer * exp10(18u8.saturating_sub(decimals));
    value * scaled_price / exp10(18)
}

fn reverted(reason: &str) -> LedgerError {
    LedgerError::Reverted {
        reason: reason.to_string(),
    }
}

impl LedgerState {
    /// Advances the chain by one block and returns the receipt summary for
    /// the transaction that produced it. The simulated ledger charges no gas.
    fn next_outcome(&mut self, confirmations: u64) -> TransactionOutcome {
        self.block_number += 1;
        self.transaction_count += 1;

        TransactionOutcome {
            tx_hash: keccak256(self.transaction_count.to_be_bytes()),
            block_number: self.block_number,
            gas_used: 0,
            confirmations: confirmations.max(1),
        }
    }

    fn contract_address(&self, deployer: Address) -> Address {
        let mut seed = Vec::with_capacity(28);
        seed.extend_from_slice(deployer.as_slice());
        seed.extend_from_slice(&self.transaction_count.to_be_bytes());
        Address::from_word(keccak256(&seed))
    }

    fn fund(&mut self, contract: Address, from: Address, value: U256) -> Result<(), LedgerError> {
        let fund_me = match self.contracts.get(&contract) {
            Some(ContractState::FundMe(state)) => state,
            Some(_) | None => return Err(LedgerError::UnknownContract(contract)),
        };
        let price_feed = fund_me.price_feed;

        let (decimals, answer) = match self.contracts.get(&price_feed) {
            Some(ContractState::Aggregator { decimals, answer }) => (*decimals, *answer),
            Some(_) | None => return Err(reverted("price feed unavailable")),
        };

        if to_usd(value, answer, decimals) < U256::from(MINIMUM_USD) {
            return Err(reverted(BELOW_MINIMUM_REVERT));
        }

        let sender_balance = self.balances.get(&from).copied().unwrap_or_default();
        if sender_balance < value {
            return Err(LedgerError::InsufficientBalance(from));
        }

        self.balances.insert(from, sender_balance - value);
        *self.balances.entry(contract).or_default() += value;

        if let Some(ContractState::FundMe(state)) = self.contracts.get_mut(&contract) {
            let funded = state.funded.entry(from).or_default();
            if funded.is_zero() {
                state.funders.push(from);
            }
            *funded += value;
        }
        Ok(())
    }

    fn withdraw(&mut self, contract: Address, from: Address) -> Result<(), LedgerError> {
        let fund_me = match self.contracts.get_mut(&contract) {
            Some(ContractState::FundMe(state)) => state,
            Some(_) | None => return Err(LedgerError::UnknownContract(contract)),
        };

        if from != fund_me.owner {
            return Err(reverted(NOT_OWNER_REVERT));
        }

        let owner = fund_me.owner;
        fund_me.funders.clear();
        fund_me.funded.clear();

        let contract_balance = self.balances.get(&contract).copied().unwrap_or_default();
        self.balances.insert(contract, U256::ZERO);
        *self.balances.entry(owner).or_default() += contract_balance;
        Ok(())
    }
}

#[async_trait]
impl LedgerClient for InMemoryLedger {
    async fn get_accounts(&self) -> Result<Vec<Address>, LedgerError> {
        Ok(self.accounts.clone())
    }

    async fn get_balance(&self, address: Address) -> Result<U256, LedgerError> {
        let state = self.state.lock().expect("ledger state lock poisoned");
        Ok(state.balances.get(&address).copied().unwrap_or_default())
    }

    async fn deploy_contract(
        &self,
        name: &str,
        constructor_args: Vec<CallArg>,
        from: Address,
        confirmations: u64,
    ) -> Result<DeploymentRecord, LedgerError> {
        let mut state = self.state.lock().expect("ledger state lock poisoned");

        let contract = match name {
            MOCK_AGGREGATOR_CONTRACT => match constructor_args.as_slice() {
                [CallArg::Uint(decimals), CallArg::Uint(answer)] => {
                    let decimals = u8::try_from(*decimals)
                        .map_err(|_| reverted("invalid constructor arguments"))?;
                    ContractState::Aggregator {
                        decimals,
                        answer: *answer,
                    }
                }
                _ => return Err(reverted("invalid constructor arguments")),
            },
            FUND_ME_CONTRACT => match constructor_args.as_slice() {
                [CallArg::Address(price_feed)] => ContractState::FundMe(FundMeState {
                    price_feed: *price_feed,
                    owner: from,
                    funders: Vec::new(),
                    funded: HashMap::new(),
                }),
                _ => return Err(reverted("invalid constructor arguments")),
            },
            _ => return Err(LedgerError::UnknownArtifact(name.to_string())),
        };

        let outcome = state.next_outcome(confirmations);
        let address = state.contract_address(from);
        state.contracts.insert(address, contract);

        Ok(DeploymentRecord {
            name: name.to_string(),
            address,
            transaction: outcome,
        })
    }

    async fn send_transaction(
        &self,
        contract: Address,
        method: &str,
        _args: Vec<CallArg>,
        from: Address,
        value: U256,
    ) -> Result<TransactionOutcome, LedgerError> {
        let mut state = self.state.lock().expect("ledger state lock poisoned");

        match method {
            "fund()" => state.fund(contract, from, value)?,
            "withdraw()" | "cheaperWithdraw()" => state.withdraw(contract, from)?,
            _ => return Err(reverted(&format!("unknown method '{}'", method))),
        }

        Ok(state.next_outcome(1))
    }

    async fn call(
        &self,
        contract: Address,
        method: &str,
        args: Vec<CallArg>,
    ) -> Result<Bytes, LedgerError> {
        let state = self.state.lock().expect("ledger state lock poisoned");

        let fund_me = match state.contracts.get(&contract) {
            Some(ContractState::FundMe(fund_me)) => fund_me,
            Some(_) => return Err(reverted(&format!("unknown method '{}'", method))),
            None => return Err(LedgerError::UnknownContract(contract)),
        };

        let word = match (method, args.as_slice()) {
            ("s_priceFeed()", []) => abi::encode_word(&CallArg::Address(fund_me.price_feed)),
            ("getOwner()", []) => abi::encode_word(&CallArg::Address(fund_me.owner)),
            ("MINIMUM_USD()", []) => abi::encode_word(&CallArg::Uint(U256::from(MINIMUM_USD))),
            ("s_funders(uint256)", [CallArg::Uint(index)]) => {
                let funder = usize::try_from(*index)
                    .ok()
                    .and_then(|index| fund_me.funders.get(index))
                    .ok_or_else(|| reverted(OUT_OF_BOUNDS_REVERT))?;
                abi::encode_word(&CallArg::Address(*funder))
            }
            ("s_addressToAmountFunded(address)", [CallArg::Address(funder)]) => {
                let amount = fund_me.funded.get(funder).copied().unwrap_or_default();
                abi::encode_word(&CallArg::Uint(amount))
            }
            _ => return Err(reverted(&format!("unknown method '{}'", method))),
        };

        Ok(Bytes::from(word.to_vec()))
    }
}
