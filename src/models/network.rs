//! Resolved network models.
//!
//! `NetworkConfig` is the validated, typed form of a network entry from the
//! configuration file: addresses parsed, defaults applied, immutable for the
//! rest of the process.

use alloy::primitives::Address;

use crate::{
    config::{Config, ConfigFileError, NetworkFileConfig},
    constants::DEFAULT_CONFIRMATIONS,
    models::ConfigurationError,
};

/// A single network the harness can deploy to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Unique network identifier (e.g., "localhost", "sepolia").
    pub network: String,
    /// The chain identifier of the network.
    pub chain_id: u64,
    /// Statically configured price feed address. `None` on development
    /// networks, where a mock aggregator is deployed instead.
    pub price_feed: Option<Address>,
    /// RPC endpoint URLs for connecting to the network.
    pub rpc_urls: Vec<String>,
    /// Whether the network is a local/ephemeral development network.
    pub is_development: bool,
    /// Block confirmations to wait for before treating a deployment as final.
    pub required_confirmations: u64,
}

impl TryFrom<&NetworkFileConfig> for NetworkConfig {
    type Error = ConfigFileError;

    fn try_from(file: &NetworkFileConfig) -> Result<Self, Self::Error> {
        file.validate()?;

        let price_feed = file
            .price_feed
            .as_deref()
            .map(|raw| {
                raw.parse::<Address>().map_err(|e| {
                    ConfigFileError::InvalidFormat(format!(
                        "Invalid price feed address for network '{}': {}",
                        file.network, e
                    ))
                })
            })
            .transpose()?;

        Ok(Self {
            network: file.network.clone(),
            chain_id: file.chain_id.unwrap_or_default(),
            price_feed,
            rpc_urls: file.rpc_urls.clone().unwrap_or_default(),
            is_development: file.is_development.unwrap_or(false),
            required_confirmations: file.required_confirmations.unwrap_or(DEFAULT_CONFIRMATIONS),
        })
    }
}

/// The immutable set of configured networks, constructed once at startup.
#[derive(Debug, Clone, Default)]
pub struct Networks {
    networks: Vec<NetworkConfig>,
}

impl TryFrom<&Config> for Networks {
    type Error = ConfigFileError;

    fn try_from(config: &Config) -> Result<Self, Self::Error> {
        let networks = config
            .networks
            .iter()
            .map(NetworkConfig::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(networks))
    }
}

impl Networks {
    pub fn new(networks: Vec<NetworkConfig>) -> Self {
        Self { networks }
    }

    /// Looks up a network by chain identifier.
    pub fn by_chain_id(&self, chain_id: u64) -> Result<&NetworkConfig, ConfigurationError> {
        self.networks
            .iter()
            .find(|network| network.chain_id == chain_id)
            .ok_or(ConfigurationError::UnknownNetwork(chain_id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &NetworkConfig> {
        self.networks.iter()
    }
}
