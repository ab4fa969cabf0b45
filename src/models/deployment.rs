//! Deployment and transaction result records.

use alloy::primitives::{Address, B256};
use serde::{Deserialize, Serialize};

/// Receipt summary for an executed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutcome {
    pub tx_hash: B256,
    pub block_number: u64,
    pub gas_used: u64,
    /// Confirmations waited for before the outcome was treated as final.
    pub confirmations: u64,
}

/// Result of a contract deployment. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    /// Logical contract name the deployment is registered under.
    pub name: String,
    /// Address the contract was created at.
    pub address: Address,
    pub transaction: TransactionOutcome,
}
