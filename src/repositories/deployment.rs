//! In-memory deployment registry with per-network file persistence.
//!
//! Maps logical contract names to their `DeploymentRecord`. The deploy binary
//! saves a snapshot under the deployments directory so the withdraw binary,
//! running as a separate process, can locate the contract it operates on.
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use dashmap::DashMap;
use thiserror::Error;

use crate::models::DeploymentRecord;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("No deployment recorded for contract '{0}'")]
    NotFound(String),
    #[error("Deployments file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed deployments file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Registry of contracts deployed in the current session or loaded from a
/// previous one.
#[derive(Debug, Default)]
pub struct DeploymentRegistry {
    records: DashMap<String, DeploymentRecord>,
}

impl DeploymentRegistry {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Records a deployment under its logical name, replacing any earlier
    /// record for the same contract.
    pub fn record(&self, record: DeploymentRecord) {
        self.records.insert(record.name.clone(), record);
    }

    /// Returns the record for a logical contract name, if one exists.
    pub fn get(&self, name: &str) -> Option<DeploymentRecord> {
        self.records.get(name).map(|entry| entry.value().clone())
    }

    /// Returns the record for a logical contract name, failing if absent.
    pub fn require(&self, name: &str) -> Result<DeploymentRecord, RegistryError> {
        self.get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path of the deployments file for a network.
    pub fn file_path(deployments_dir: &str, network: &str) -> PathBuf {
        Path::new(deployments_dir).join(format!("{}.json", network))
    }

    /// Persists a snapshot of the registry as JSON, creating the parent
    /// directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), RegistryError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let snapshot: BTreeMap<String, DeploymentRecord> = self
            .records
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        fs::write(path, serde_json::to_string_pretty(&snapshot)?)?;
        Ok(())
    }

    /// Loads a registry snapshot previously written by [`save`](Self::save).
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(path)?;
        let snapshot: BTreeMap<String, DeploymentRecord> = serde_json::from_str(&contents)?;

        let registry = Self::new();
        for (name, record) in snapshot {
            registry.records.insert(name, record);
        }
        Ok(registry)
    }
}
