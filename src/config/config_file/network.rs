//! Network entry of the configuration file.
//!
//! Development networks carry no static price feed address; the harness
//! deploys a mock aggregator there instead. Live and test networks must name
//! their feed explicitly.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::config::ConfigFileError;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct NetworkFileConfig {
    /// Unique network identifier (e.g., "localhost", "sepolia").
    pub network: String,
    /// The unique chain identifier (Chain ID) for the network.
    pub chain_id: Option<u64>,
    /// Price feed contract address. Required unless `is_development` is set.
    pub price_feed: Option<String>,
    /// List of RPC endpoint URLs for connecting to the network.
    pub rpc_urls: Option<Vec<String>>,
    /// Flag indicating if the network is a local development network.
    pub is_development: Option<bool>,
    /// Number of block confirmations required before a deployment is
    /// considered final.
    pub required_confirmations: Option<u64>,
}

impl NetworkFileConfig {
    /// Validates the configuration fields for a network entry.
    ///
    /// # Returns
    /// - `Ok(())` if the configuration is valid.
    /// - `Err(ConfigFileError)` if validation fails (e.g., missing fields,
    ///   invalid URLs).
    pub fn validate(&self) -> Result<(), ConfigFileError> {
        if self.network.is_empty() {
            return Err(ConfigFileError::MissingField("network name".into()));
        }

        if self.chain_id.is_none() {
            return Err(ConfigFileError::MissingField("chain_id".into()));
        }

        let rpc_urls = self
            .rpc_urls
            .as_ref()
            .filter(|urls| !urls.is_empty())
            .ok_or_else(|| ConfigFileError::MissingField("rpc_urls".into()))?;

        for url in rpc_urls {
            reqwest::Url::parse(url).map_err(|_| {
                ConfigFileError::InvalidFormat(format!("Invalid RPC URL: {}", url))
            })?;
        }

        let is_development = self.is_development.unwrap_or(false);
        match &self.price_feed {
            Some(address) => {
                address.parse::<Address>().map_err(|_| {
                    ConfigFileError::InvalidFormat(format!(
                        "Invalid price feed address: {}",
                        address
                    ))
                })?;
            }
            None if !is_development => {
                return Err(ConfigFileError::MissingField(format!(
                    "price_feed for network '{}'",
                    self.network
                )));
            }
            None => {}
        }

        Ok(())
    }
}
