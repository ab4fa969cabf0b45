use thiserror::Error;

/// Failures while resolving deployment configuration for a network.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("No network configured for chain id {0}")]
    UnknownNetwork(u64),
    #[error("Network '{0}' has no price feed configured")]
    MissingPriceFeed(String),
    #[error("Mock price feed has not been deployed on this network yet")]
    MissingMockDeployment,
}
