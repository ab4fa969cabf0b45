use thiserror::Error;

use super::ConfigurationError;
use crate::services::LedgerError;

/// Failures while creating a contract on the ledger.
#[derive(Error, Debug)]
pub enum DeploymentError {
    #[error("No unlocked accounts available on the ledger")]
    NoAccounts,
    #[error("Contract creation reverted: {0}")]
    Reverted(String),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("Ledger error: {0}")]
    Ledger(LedgerError),
}

impl From<LedgerError> for DeploymentError {
    fn from(error: LedgerError) -> Self {
        match error {
            LedgerError::Reverted { reason } => DeploymentError::Reverted(reason),
            other => DeploymentError::Ledger(other),
        }
    }
}
