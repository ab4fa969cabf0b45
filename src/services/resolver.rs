//! Price feed resolution.
//!
//! Decides which price feed address the contract is constructed with: the
//! mock aggregator recorded in the deployment registry on development
//! networks, or the statically configured feed for the chain id otherwise.
//! Pure lookup, no side effects.

use alloy::primitives::Address;

use crate::{
    constants::MOCK_AGGREGATOR_CONTRACT,
    models::{ConfigurationError, Networks},
    repositories::DeploymentRegistry,
};

/// Resolves the price feed address for a network.
///
/// On development networks the mock aggregator must already be recorded in
/// `registry`; deployment ordering guarantees this when the sequence is
/// driven by [`deploy_contracts`](crate::services::deploy_contracts).
///
/// # Errors
/// - `ConfigurationError::MissingMockDeployment` if no mock has been deployed
///   yet on a development network.
/// - `ConfigurationError::UnknownNetwork` if the chain id is not configured.
/// - `ConfigurationError::MissingPriceFeed` if a non-development network has
///   no feed address configured.
pub fn resolve_price_feed_address(
    networks: &Networks,
    chain_id: u64,
    is_development: bool,
    registry: &DeploymentRegistry,
) -> Result<Address, ConfigurationError> {
    if is_development {
        return registry
            .get(MOCK_AGGREGATOR_CONTRACT)
            .map(|record| record.address)
            .ok_or(ConfigurationError::MissingMockDeployment);
    }

    let network = networks.by_chain_id(chain_id)?;
    network
        .price_feed
        .ok_or_else(|| ConfigurationError::MissingPriceFeed(network.network.clone()))
}
