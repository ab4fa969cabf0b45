//! This module provides functionality for loading and validating the networks
//! configuration file for the deployment harness.
//!
//! The file declares the networks the harness can deploy to: their chain
//! identifiers, RPC endpoints, whether they are local development networks,
//! and the statically configured price feed address for live networks.
//! Validation runs before any component consumes the configuration, so that
//! a missing field or a malformed address fails at startup rather than at
//! deployment time.
use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::config::ConfigFileError;

mod network;
pub use network::*;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub networks: Vec<NetworkFileConfig>,
}

impl Config {
    /// Validates every network entry and cross-entry uniqueness constraints.
    ///
    /// # Errors
    /// Returns a `ConfigFileError` if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigFileError> {
        if self.networks.is_empty() {
            return Err(ConfigFileError::MissingField("networks".into()));
        }

        for network in &self.networks {
            network.validate()?;
        }

        self.validate_unique_names()?;
        self.validate_unique_chain_ids()?;

        Ok(())
    }

    fn validate_unique_names(&self) -> Result<(), ConfigFileError> {
        let mut names = HashSet::new();
        for network in &self.networks {
            if !names.insert(&network.network) {
                return Err(ConfigFileError::DuplicateNetwork(format!(
                    "Network name '{}' appears more than once",
                    network.network
                )));
            }
        }
        Ok(())
    }

    fn validate_unique_chain_ids(&self) -> Result<(), ConfigFileError> {
        let mut chain_ids = HashSet::new();
        for network in &self.networks {
            if let Some(chain_id) = network.chain_id {
                if !chain_ids.insert(chain_id) {
                    return Err(ConfigFileError::DuplicateNetwork(format!(
                        "Chain id {} appears more than once",
                        chain_id
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Loads and validates the networks configuration from a JSON file.
///
/// # Errors
/// Returns a `ConfigFileError` if the file is missing, unreadable, malformed,
/// or fails validation.
pub fn load_config(config_file_path: &str) -> Result<Config, ConfigFileError> {
    if !Path::new(config_file_path).exists() {
        return Err(ConfigFileError::FileNotFound(config_file_path.to_string()));
    }

    let contents = fs::read_to_string(config_file_path)?;
    let config: Config = serde_json::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}
