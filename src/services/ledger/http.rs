//! HTTP ledger client for EVM-compatible networks.
//!
//! Implements [`LedgerClient`] over a JSON-RPC endpoint. Contract creation
//! code is read from compiled artifacts on disk; calldata is built from the
//! method signature and hand-encoded argument words. Transactions are sent
//! from unlocked node accounts, so this client performs no signing of its
//! own.

use std::{fs, io::ErrorKind, path::PathBuf, time::Duration};

use alloy::{
    primitives::{Address, Bytes, TxKind, U256},
    providers::{Provider, ProviderBuilder, RootProvider},
    rpc::{
        client::ClientBuilder,
        types::{TransactionInput, TransactionReceipt, TransactionRequest},
    },
    transports::{
        http::{Client, Http},
        RpcError, TransportErrorKind,
    },
};
use async_trait::async_trait;
use reqwest::ClientBuilder as ReqwestClientBuilder;
use serde::Deserialize;

use super::{LedgerClient, LedgerError};
use crate::{
    models::{CallArg, DeploymentRecord, TransactionOutcome},
    utils::abi,
};

/// Compiled contract artifact, as emitted by the contract build pipeline.
/// Only the creation bytecode is consumed; the rest of the artifact is
/// ignored.
#[derive(Debug, Deserialize)]
struct ContractArtifact {
    bytecode: String,
}

/// Ledger client backed by an HTTP JSON-RPC provider.
pub struct HttpLedger {
    provider: RootProvider<Http<Client>>,
    artifacts_dir: PathBuf,
}

impl HttpLedger {
    /// Creates a new HTTP ledger client.
    ///
    /// # Arguments
    /// * `rpc_url` - The JSON-RPC endpoint of the target network
    /// * `artifacts_dir` - Directory holding `<name>.json` contract artifacts
    /// * `timeout_seconds` - Timeout for each RPC request
    pub fn new(
        rpc_url: &str,
        artifacts_dir: impl Into<PathBuf>,
        timeout_seconds: u64,
    ) -> Result<Self, LedgerError> {
        let url = rpc_url
            .parse()
            .map_err(|e| LedgerError::Rpc(format!("Invalid RPC URL format: {}", e)))?;

        let client = ReqwestClientBuilder::default()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| LedgerError::Rpc(format!("Failed to build HTTP client: {}", e)))?;

        let mut transport = Http::new(url);
        transport.set_client(client);

        let is_local = transport.guess_local();
        let client = ClientBuilder::default().transport(transport, is_local);
        let provider = ProviderBuilder::new().on_client(client);

        Ok(Self {
            provider,
            artifacts_dir: artifacts_dir.into(),
        })
    }

    /// Reads the creation bytecode for a logical contract name.
    fn creation_code(&self, name: &str) -> Result<Vec<u8>, LedgerError> {
        let path = self.artifacts_dir.join(format!("{}.json", name));
        let contents = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                LedgerError::UnknownArtifact(name.to_string())
            } else {
                LedgerError::MalformedArtifact {
                    name: name.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        let artifact: ContractArtifact =
            serde_json::from_str(&contents).map_err(|e| LedgerError::MalformedArtifact {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        alloy::hex::decode(artifact.bytecode.trim_start_matches("0x")).map_err(|e| {
            LedgerError::MalformedArtifact {
                name: name.to_string(),
                reason: format!("bytecode is not valid hex: {}", e),
            }
        })
    }

    async fn confirmed_receipt(
        &self,
        tx: TransactionRequest,
        confirmations: u64,
    ) -> Result<TransactionReceipt, LedgerError> {
        let confirmations = confirmations.max(1);
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(classify_rpc_error)?;

        let receipt = pending
            .with_required_confirmations(confirmations)
            .get_receipt()
            .await
            .map_err(|e| LedgerError::Rpc(format!("Transaction failed to confirm: {}", e)))?;

        if !receipt.status() {
            return Err(LedgerError::Reverted {
                reason: format!("transaction {} reverted", receipt.transaction_hash),
            });
        }
        Ok(receipt)
    }
}

/// Maps an RPC failure into the ledger error taxonomy. Execution reverts
/// arrive as JSON-RPC error responses whose message carries the contract's
/// reason string.
fn classify_rpc_error(error: RpcError<TransportErrorKind>) -> LedgerError {
    if let Some(payload) = error.as_error_resp() {
        let message = payload.message.to_string();
        if message.to_lowercase().contains("revert") {
            return LedgerError::Reverted { reason: message };
        }
        return LedgerError::Rpc(message);
    }
    LedgerError::Rpc(error.to_string())
}

fn outcome_from_receipt(receipt: &TransactionReceipt, confirmations: u64) -> TransactionOutcome {
    TransactionOutcome {
        tx_hash: receipt.transaction_hash,
        block_number: receipt.block_number.unwrap_or_default(),
        gas_used: receipt.gas_used as u64,
        confirmations,
    }
}

#[async_trait]
impl LedgerClient for HttpLedger {
    async fn get_accounts(&self) -> Result<Vec<Address>, LedgerError> {
        self.provider
            .get_accounts()
            .await
            .map_err(classify_rpc_error)
    }

    async fn get_balance(&self, address: Address) -> Result<U256, LedgerError> {
        self.provider
            .get_balance(address)
            .await
            .map_err(classify_rpc_error)
    }

    async fn deploy_contract(
        &self,
        name: &str,
        constructor_args: Vec<CallArg>,
        from: Address,
        confirmations: u64,
    ) -> Result<DeploymentRecord, LedgerError> {
        let mut code = self.creation_code(name)?;
        code.extend_from_slice(&abi::encode_args(&constructor_args));

        let tx = TransactionRequest {
            from: Some(from),
            to: Some(TxKind::Create),
            input: TransactionInput::new(code.into()),
            ..Default::default()
        };

        let confirmations = confirmations.max(1);
        let receipt = self.confirmed_receipt(tx, confirmations).await?;
        let address = receipt.contract_address.ok_or_else(|| {
            LedgerError::Rpc(format!(
                "Creation receipt for '{}' carries no contract address",
                name
            ))
        })?;

        Ok(DeploymentRecord {
            name: name.to_string(),
            address,
            transaction: outcome_from_receipt(&receipt, confirmations),
        })
    }

    async fn send_transaction(
        &self,
        contract: Address,
        method: &str,
        args: Vec<CallArg>,
        from: Address,
        value: U256,
    ) -> Result<TransactionOutcome, LedgerError> {
        let tx = TransactionRequest {
            from: Some(from),
            to: Some(TxKind::Call(contract)),
            value: Some(value),
            input: TransactionInput::new(abi::encode_call(method, &args)),
            ..Default::default()
        };

        let receipt = self.confirmed_receipt(tx, 1).await?;
        Ok(outcome_from_receipt(&receipt, 1))
    }

    async fn call(
        &self,
        contract: Address,
        method: &str,
        args: Vec<CallArg>,
    ) -> Result<Bytes, LedgerError> {
        let tx = TransactionRequest {
            to: Some(TxKind::Call(contract)),
            input: TransactionInput::new(abi::encode_call(method, &args)),
            ..Default::default()
        };

        self.provider.call(&tx).await.map_err(classify_rpc_error)
    }
}
