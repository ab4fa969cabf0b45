//! Logical contract names and deployment defaults.

/// Registry name of the funding contract.
pub const FUND_ME_CONTRACT: &str = "FundMe";

/// Registry name of the mock price feed deployed on development networks.
pub const MOCK_AGGREGATOR_CONTRACT: &str = "MockV3Aggregator";

/// Block confirmations to wait for when a network does not configure its own.
pub const DEFAULT_CONFIRMATIONS: u64 = 1;

/// Revert reason raised by the contract when a non-owner attempts withdrawal.
pub const NOT_OWNER_REVERT: &str = "FundMe__NotOwner";

/// Revert reason raised by the contract when the funded value converts to
/// less than the minimum USD threshold.
pub const BELOW_MINIMUM_REVERT: &str = "You need to spend more ETH!";
