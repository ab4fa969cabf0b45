//! Ledger client abstraction.
//!
//! The external blockchain runtime is an opaque collaborator: it owns
//! accounts, contract state and transaction ordering. The harness only ever
//! talks to it through this trait, which reports failures as typed results.
//! Contract-level failures surface as [`LedgerError::Reverted`] with the
//! contract's reason string; callers translate known reasons into their own
//! error taxonomy and must never retry a transaction automatically.

use alloy::primitives::{Address, Bytes, U256};
use async_trait::async_trait;
use thiserror::Error;

use crate::{
    models::{CallArg, DeploymentRecord, TransactionOutcome},
    utils::abi::AbiError,
};

#[cfg(test)]
use mockall::automock;

mod http;
pub use http::*;

mod memory;
pub use memory::*;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Transaction reverted: {reason}")]
    Reverted { reason: String },
    #[error("RPC error: {0}")]
    Rpc(String),
    #[error("No contract artifact named '{0}'")]
    UnknownArtifact(String),
    #[error("Malformed artifact for '{name}': {reason}")]
    MalformedArtifact { name: String, reason: String },
    #[error("No contract deployed at {0}")]
    UnknownContract(Address),
    #[error("Account {0} has insufficient balance")]
    InsufficientBalance(Address),
    #[error("ABI error: {0}")]
    Abi(#[from] AbiError),
}

/// Interface to the external ledger.
///
/// Each operation is a single blocking round trip: it either completes on the
/// ledger or fails, with no partial-result visibility and no cancellation
/// once a transaction is broadcast.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait LedgerClient: Send + Sync {
    /// Lists the unlocked accounts the ledger can send transactions from.
    async fn get_accounts(&self) -> Result<Vec<Address>, LedgerError>;

    /// Returns the native-currency balance of an address.
    async fn get_balance(&self, address: Address) -> Result<U256, LedgerError>;

    /// Broadcasts a contract-creation transaction and waits for at least
    /// `confirmations` block confirmations before returning.
    ///
    /// # Arguments
    /// * `name` - Logical contract name, used to locate the creation artifact
    /// * `constructor_args` - ABI arguments appended to the creation code
    /// * `from` - Account the creation transaction is sent from
    /// * `confirmations` - Block confirmations to wait for
    async fn deploy_contract(
        &self,
        name: &str,
        constructor_args: Vec<CallArg>,
        from: Address,
        confirmations: u64,
    ) -> Result<DeploymentRecord, LedgerError>;

    /// Executes a state-changing method on a deployed contract.
    ///
    /// # Arguments
    /// * `contract` - Address of the deployed contract
    /// * `method` - Canonical method signature, e.g. `"fund()"`
    /// * `args` - ABI arguments for the call
    /// * `from` - Sending account
    /// * `value` - Native currency attached to the call
    async fn send_transaction(
        &self,
        contract: Address,
        method: &str,
        args: Vec<CallArg>,
        from: Address,
        value: U256,
    ) -> Result<TransactionOutcome, LedgerError>;

    /// Executes a read-only method and returns the raw ABI return data.
    async fn call(
        &self,
        contract: Address,
        method: &str,
        args: Vec<CallArg>,
    ) -> Result<Bytes, LedgerError>;
}
