//! Typed handle for a deployed FundMe contract.
//!
//! Wraps the ledger client with the contract's method surface and translates
//! its revert semantics into typed errors: an owner check failure becomes
//! [`FundMeError::Permission`], an under-threshold funding value becomes
//! [`FundMeError::InsufficientValue`]. Anything else propagates untouched;
//! contract interactions are never silently retried.

use alloy::primitives::{Address, U256};
use thiserror::Error;

use crate::{
    constants::{BELOW_MINIMUM_REVERT, FUND_ME_CONTRACT, NOT_OWNER_REVERT},
    models::{CallArg, TransactionOutcome},
    repositories::{DeploymentRegistry, RegistryError},
    services::{LedgerClient, LedgerError},
    utils::abi,
};

const FUND: &str = "fund()";
const WITHDRAW: &str = "withdraw()";
const CHEAPER_WITHDRAW: &str = "cheaperWithdraw()";
const PRICE_FEED: &str = "s_priceFeed()";
const OWNER: &str = "getOwner()";
const MINIMUM_USD: &str = "MINIMUM_USD()";
const FUNDERS: &str = "s_funders(uint256)";
const AMOUNT_FUNDED: &str = "s_addressToAmountFunded(address)";

#[derive(Error, Debug)]
pub enum FundMeError {
    #[error("Caller is not the contract owner")]
    Permission,
    #[error("Funding value is below the minimum threshold")]
    InsufficientValue,
    #[error(transparent)]
    Ledger(LedgerError),
}

impl From<LedgerError> for FundMeError {
    fn from(error: LedgerError) -> Self {
        match error {
            LedgerError::Reverted { ref reason } if reason.contains(NOT_OWNER_REVERT) => {
                FundMeError::Permission
            }
            LedgerError::Reverted { ref reason } if reason.contains(BELOW_MINIMUM_REVERT) => {
                FundMeError::InsufficientValue
            }
            other => FundMeError::Ledger(other),
        }
    }
}

/// A FundMe contract bound to its deployed address.
pub struct FundMe<'a, L: LedgerClient + ?Sized> {
    ledger: &'a L,
    address: Address,
}

impl<'a, L: LedgerClient + ?Sized> FundMe<'a, L> {
    /// Binds a handle to a known contract address.
    pub fn new(ledger: &'a L, address: Address) -> Self {
        Self { ledger, address }
    }

    /// Binds a handle to the FundMe deployment recorded in `registry`.
    pub fn attach(ledger: &'a L, registry: &DeploymentRegistry) -> Result<Self, RegistryError> {
        let record = registry.require(FUND_ME_CONTRACT)?;
        Ok(Self::new(ledger, record.address))
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Funds the contract with `value` from the given account.
    pub async fn fund(
        &self,
        from: Address,
        value: U256,
    ) -> Result<TransactionOutcome, FundMeError> {
        self.ledger
            .send_transaction(self.address, FUND, vec![], from, value)
            .await
            .map_err(FundMeError::from)
    }

    /// Withdraws the full contract balance to the owner. Owner-only.
    pub async fn withdraw(&self, from: Address) -> Result<TransactionOutcome, FundMeError> {
        self.ledger
            .send_transaction(self.address, WITHDRAW, vec![], from, U256::ZERO)
            .await
            .map_err(FundMeError::from)
    }

    /// Gas-cheaper variant of [`withdraw`](Self::withdraw) with the same
    /// observable postconditions.
    pub async fn cheaper_withdraw(&self, from: Address) -> Result<TransactionOutcome, FundMeError> {
        self.ledger
            .send_transaction(self.address, CHEAPER_WITHDRAW, vec![], from, U256::ZERO)
            .await
            .map_err(FundMeError::from)
    }

    /// Price feed address the contract was constructed with.
    pub async fn price_feed(&self) -> Result<Address, FundMeError> {
        let data = self.ledger.call(self.address, PRICE_FEED, vec![]).await?;
        Ok(abi::decode_address(&data).map_err(LedgerError::from)?)
    }

    pub async fn owner(&self) -> Result<Address, FundMeError> {
        let data = self.ledger.call(self.address, OWNER, vec![]).await?;
        Ok(abi::decode_address(&data).map_err(LedgerError::from)?)
    }

    /// Minimum funding value in 18-decimal USD.
    pub async fn minimum_usd(&self) -> Result<U256, FundMeError> {
        let data = self.ledger.call(self.address, MINIMUM_USD, vec![]).await?;
        Ok(abi::decode_uint(&data).map_err(LedgerError::from)?)
    }

    /// Funder at the given index of the funder sequence. Reverts past the end
    /// of the sequence.
    pub async fn funder(&self, index: u64) -> Result<Address, FundMeError> {
        let data = self
            .ledger
            .call(self.address, FUNDERS, vec![CallArg::Uint(U256::from(index))])
            .await?;
        Ok(abi::decode_address(&data).map_err(LedgerError::from)?)
    }

    /// Cumulative amount the given account has funded.
    pub async fn amount_funded(&self, funder: Address) -> Result<U256, FundMeError> {
        let data = self
            .ledger
            .call(self.address, AMOUNT_FUNDED, vec![CallArg::Address(funder)])
            .await?;
        Ok(abi::decode_uint(&data).map_err(LedgerError::from)?)
    }

    /// Native-currency balance held by the contract.
    pub async fn balance(&self) -> Result<U256, FundMeError> {
        self.ledger
            .get_balance(self.address)
            .await
            .map_err(FundMeError::from)
    }
}
