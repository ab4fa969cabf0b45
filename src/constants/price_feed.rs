//! Price feed parameters of the external contract interface.
//!
//! The minimum threshold and feed decimals are owned by the contract and its
//! mock aggregator. They are pinned here as an opaque, versioned interface
//! contract; the harness never recomputes conversion logic from them outside
//! the simulated ledger.

/// Decimals reported by the mock aggregator.
pub const MOCK_AGGREGATOR_DECIMALS: u8 = 8;

/// Initial ETH/USD answer of the mock aggregator: $2000, 8 decimals.
pub const MOCK_AGGREGATOR_INITIAL_ANSWER: u128 = 2_000 * 100_000_000;

/// Minimum funding value enforced by the contract: $50, 18 decimals.
pub const MINIMUM_USD: u128 = 50 * 1_000_000_000_000_000_000;
